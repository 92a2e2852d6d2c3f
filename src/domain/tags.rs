//! Tag taxonomy: bounded, deduplicated, ordered labels
//!
//! Adding an empty, duplicate, or over-cap tag is a silent no-op so editors
//! can fire `add_tag` on every keypress without surfacing errors.

use crate::schemas::TagSet;

/// Maximum number of tags on a post
pub const MAX_TAGS: usize = 10;

/// Return `tags` with `candidate` appended, trimmed.
///
/// Unchanged when the trimmed candidate is empty, already present
/// (case-sensitive), or the set is full.
pub fn add_tag(tags: &TagSet, candidate: &str) -> TagSet {
    let tag = candidate.trim();
    let mut next = tags.clone();
    if tag.is_empty() || tags.contains(tag) || tags.len() >= MAX_TAGS {
        return next;
    }
    next.push_unchecked(tag.to_string());
    next
}

/// Return `tags` without any exact match of `candidate`
pub fn remove_tag(tags: &TagSet, candidate: &str) -> TagSet {
    let mut next = tags.clone();
    next.retain(|t| t != candidate);
    next
}

/// Re-apply the taxonomy rules to a set of unknown provenance
pub fn normalize_tags(tags: &TagSet) -> TagSet {
    tags.iter().collect()
}

/// Flip a tag in a reader's active filter list.
///
/// Present tags are removed, absent ones appended. Filters are not capped.
pub fn toggle_filter(active: &[String], tag: &str) -> Vec<String> {
    if active.iter().any(|t| t == tag) {
        active.iter().filter(|t| *t != tag).cloned().collect()
    } else {
        let mut next = active.to_vec();
        next.push(tag.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> TagSet {
        items.iter().collect()
    }

    #[test]
    fn test_add_appends_trimmed() {
        let set = add_tag(&TagSet::new(), "  rust ");
        assert_eq!(set.as_slice(), &["rust".to_string()]);
    }

    #[test]
    fn test_add_preserves_order() {
        let set = add_tag(&add_tag(&tags(&["b"]), "a"), "c");
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_add_ignores_empty_and_duplicates() {
        let set = tags(&["rust"]);
        assert_eq!(add_tag(&set, "   "), set);
        assert_eq!(add_tag(&set, "rust"), set);
        assert_eq!(add_tag(&set, " rust "), set);
        assert_eq!(add_tag(&set, "Rust").len(), 2);
    }

    #[test]
    fn test_add_stops_at_cap() {
        let full: TagSet = (0..MAX_TAGS).map(|i| format!("t{}", i)).collect();
        assert_eq!(full.len(), MAX_TAGS);
        assert_eq!(add_tag(&full, "one-more"), full);
    }

    #[test]
    fn test_remove() {
        let set = tags(&["a", "b", "c"]);
        assert_eq!(remove_tag(&set, "b").into_vec(), vec!["a", "c"]);
        assert_eq!(remove_tag(&set, "z"), set);
        assert_eq!(remove_tag(&set, "B"), set);
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let set = tags(&["a"]);
        let _ = add_tag(&set, "b");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_normalize_tags_repairs_submitted_set() {
        let raw: TagSet = serde_json::from_str(r#"[" a ", "a", "", "b"]"#).unwrap();
        assert_eq!(normalize_tags(&raw).into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_filter() {
        let active = toggle_filter(&[], "rust");
        assert_eq!(active, vec!["rust"]);
        let active = toggle_filter(&active, "web");
        assert_eq!(active, vec!["rust", "web"]);
        let active = toggle_filter(&active, "rust");
        assert_eq!(active, vec!["web"]);
    }
}
