//! Tag set schema - Ordered topical labels attached to a post

use serde::{Deserialize, Serialize};

/// An ordered sequence of distinct, trimmed, non-empty labels.
///
/// Sets built through [`crate::domain::add_tag`] or `FromIterator` always hold
/// the invariants. A set deserialized from JSON is taken as submitted, so the
/// post schema re-checks its size before accepting it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        TagSet(Vec::new())
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no tags
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Iterate tags in display order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Borrow the tags in display order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the set, returning the tags in display order
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub(crate) fn push_unchecked(&mut self, tag: String) {
        self.0.push(tag);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.0.retain(keep);
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TagSet::new(), |set, tag| crate::domain::add_tag(&set, tag.as_ref()))
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_set_serializes_as_array() {
        let tags: TagSet = ["rust", "web"].into_iter().collect();
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["rust","web"]"#);
    }

    #[test]
    fn test_deserialized_set_is_taken_as_submitted() {
        let tags: TagSet = serde_json::from_str(r#"["a","a"," b "]"#).unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_collect_normalizes() {
        let tags: TagSet = [" rust ", "rust", "", "Rust"].into_iter().collect();
        assert_eq!(tags.as_slice(), &["rust".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let tags: TagSet = ["Rust"].into_iter().collect();
        assert!(tags.contains("Rust"));
        assert!(!tags.contains("rust"));
    }
}
