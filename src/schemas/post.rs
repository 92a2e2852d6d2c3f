//! Post schema - The authored post and its lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tags::TagSet;

/// Lifecycle status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// Author-only, not publicly visible
    #[default]
    Draft,
    /// Validated and waiting for its publish instant
    Scheduled,
    /// Live on the public read path
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Scheduled => write!(f, "scheduled"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "scheduled" => Ok(PostStatus::Scheduled),
            "published" => Ok(PostStatus::Published),
            _ => Err(format!("Unknown post status: {}", s)),
        }
    }
}

/// A post as submitted by its author.
///
/// Text fields hold raw author input; `validate_post` produces the
/// normalized copy. Optional text fields accept `""` as "not provided".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Headline, 1 to 200 characters
    #[serde(default)]
    pub title: String,

    /// URL-safe identifier, usually generated from the title
    #[serde(default)]
    pub slug: String,

    /// Short summary shown in listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Post body (Markdown/MDX, rendered elsewhere)
    #[serde(default)]
    pub content: String,

    /// Topical labels in display order
    #[serde(default)]
    pub tags: TagSet,

    /// Absolute URL of the hero image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// SEO title override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// SEO description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Current lifecycle status
    #[serde(default)]
    pub status: PostStatus,

    /// Requested publish instant, as typed by the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,

    /// Instant of the first real publication; scheduling never sets it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Default for PostDraft {
    fn default() -> Self {
        PostDraft::new()
    }
}

impl PostDraft {
    /// Create the empty draft a "new post" action starts from
    pub fn new() -> Self {
        PostDraft {
            title: String::new(),
            slug: String::new(),
            excerpt: None,
            content: String::new(),
            tags: TagSet::new(),
            featured_image: None,
            meta_title: None,
            meta_description: None,
            status: PostStatus::Draft,
            scheduled_at: None,
            published_at: None,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new draft with the given title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Return a new draft with the given slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Return a new draft with the given body
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Return a new draft with the given excerpt
    pub fn with_excerpt(mut self, excerpt: Option<String>) -> Self {
        self.excerpt = excerpt;
        self
    }

    /// Return a new draft with the given tag set
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Return a new draft with the given featured image URL
    pub fn with_featured_image(mut self, url: Option<String>) -> Self {
        self.featured_image = url;
        self
    }

    /// Return a new draft with the given SEO metadata
    pub fn with_meta(mut self, title: Option<String>, description: Option<String>) -> Self {
        self.meta_title = title;
        self.meta_description = description;
        self
    }

    /// Return a new draft with the given status
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Return a new draft with the given requested publish instant
    pub fn with_scheduled_at(mut self, scheduled_at: Option<String>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Return a new draft with the given first publication instant
    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_status_serialization() {
        assert_eq!(serde_json::to_string(&PostStatus::Draft).unwrap(), "\"draft\"");
        assert_eq!(serde_json::to_string(&PostStatus::Scheduled).unwrap(), "\"scheduled\"");
        assert_eq!(serde_json::to_string(&PostStatus::Published).unwrap(), "\"published\"");
    }

    #[test]
    fn test_post_status_from_str() {
        assert_eq!("draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
        assert_eq!("scheduled".parse::<PostStatus>().unwrap(), PostStatus::Scheduled);
        assert_eq!("published".parse::<PostStatus>().unwrap(), PostStatus::Published);
        assert!("archived".parse::<PostStatus>().is_err());
    }

    #[test]
    fn test_new_draft_is_empty_draft() {
        let draft = PostDraft::new();
        assert_eq!(draft.status, PostStatus::Draft);
        assert!(draft.title.is_empty());
        assert!(draft.tags.is_empty());
        assert!(draft.scheduled_at.is_none());
        assert!(draft.published_at.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"title": "Hello", "slug": "hello", "content": "Body"}"#;
        let draft: PostDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.status, PostStatus::Draft);
        assert!(draft.tags.is_empty());
        assert!(draft.excerpt.is_none());
    }

    #[test]
    fn test_draft_skips_none_in_serialization() {
        let json = serde_json::to_string(&PostDraft::new()).unwrap();
        assert!(!json.contains("\"excerpt\":"));
        assert!(!json.contains("\"scheduled_at\":"));
        assert!(!json.contains("\"published_at\":"));
    }

    #[test]
    fn test_builder_does_not_touch_original() {
        let draft = PostDraft::new().with_title("First");
        let renamed = draft.clone().with_title("Second");

        assert_eq!(draft.title, "First");
        assert_eq!(renamed.title, "Second");
    }
}
