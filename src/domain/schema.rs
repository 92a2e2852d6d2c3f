//! Submission schemas for posts, account credentials and comments
//!
//! Each schema runs every applicable field rule plus its cross-field rules
//! and reports all violations at once. Nothing is partially accepted.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::schemas::{CredentialInput, CredentialKind, PostDraft, PostStatus};

use super::clock::parse_instant;
use super::fields::{check, check_confirmation, validate_field, Field};
use super::tags::{normalize_tags, MAX_TAGS};
use super::validation::{RuleError, ValidationResult};

/// Validate a full post submission.
///
/// On success the returned draft is normalized: empty optional text becomes
/// `None`, tags are re-normalized, and `scheduled_at` is canonical RFC 3339
/// for scheduled posts and dropped otherwise.
pub fn validate_post(draft: &PostDraft, now: DateTime<Utc>) -> ValidationResult<PostDraft> {
    let mut errors = content_errors(draft);
    let schedule = match check_schedule(draft.status, draft.scheduled_at.as_deref(), now) {
        Ok(at) => at,
        Err(err) => {
            errors.push(err);
            None
        }
    };

    if !errors.is_empty() {
        tracing::debug!(violations = errors.len(), slug = %draft.slug, "post rejected");
        return ValidationResult::Rejected(errors);
    }

    ValidationResult::Accepted(normalize_post(draft, schedule))
}

/// Every rule on a post except the schedule requirement
pub(crate) fn content_errors(draft: &PostDraft) -> Vec<RuleError> {
    let mut errors = Vec::new();
    errors.extend(check(Field::Title, &draft.title));
    errors.extend(check(Field::Slug, &draft.slug));
    errors.extend(check(Field::Excerpt, optional(&draft.excerpt)));
    errors.extend(check(Field::Content, &draft.content));
    if draft.tags.len() > MAX_TAGS {
        errors.push(RuleError::field(
            Field::Tags.path(),
            format!("Maximum {} tags allowed", MAX_TAGS),
        ));
    }
    errors.extend(check(Field::FeaturedImage, optional(&draft.featured_image)));
    errors.extend(check(Field::MetaTitle, optional(&draft.meta_title)));
    errors.extend(check(Field::MetaDescription, optional(&draft.meta_description)));
    errors
}

/// Resolve the publish instant a scheduled post requires.
///
/// Returns `Ok(None)` for any other status; a supplied value is ignored.
pub(crate) fn check_schedule(
    status: PostStatus,
    scheduled_at: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, RuleError> {
    if status != PostStatus::Scheduled {
        return Ok(None);
    }

    let raw = scheduled_at.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(RuleError::cross_field(
            Field::ScheduledAt.path(),
            "status",
            "A publish date is required for scheduled posts",
        ));
    }

    let at = parse_instant(raw).ok_or_else(|| {
        RuleError::field(
            Field::ScheduledAt.path(),
            "Publish date must be a valid date and time",
        )
    })?;

    if at < now {
        return Err(RuleError::field(
            Field::ScheduledAt.path(),
            "Publish date must not be in the past",
        ));
    }

    Ok(Some(at))
}

pub(crate) fn normalize_post(draft: &PostDraft, schedule: Option<DateTime<Utc>>) -> PostDraft {
    PostDraft {
        excerpt: non_empty(&draft.excerpt),
        tags: normalize_tags(&draft.tags),
        featured_image: non_empty(&draft.featured_image),
        meta_title: non_empty(&draft.meta_title),
        meta_description: non_empty(&draft.meta_description),
        scheduled_at: schedule.map(format_instant),
        ..draft.clone()
    }
}

/// Canonical text form of an instant
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Validate an account form submission of the given kind.
///
/// Password confirmation mismatches are attached to `confirm_password`;
/// registration requires `accept_terms` to be exactly `true`; a reset needs
/// the non-empty `token` from its link.
pub fn validate_credential(
    kind: CredentialKind,
    input: &CredentialInput,
) -> ValidationResult<CredentialInput> {
    let mut errors = Vec::new();
    let email = optional(&input.email);
    let confirmation = optional(&input.confirm_password);

    match kind {
        CredentialKind::Login => {
            errors.extend(check(Field::Email, email));
            errors.extend(check(Field::LoginPassword, &input.password));
        }
        CredentialKind::Register => {
            errors.extend(check(Field::Username, optional(&input.username)));
            errors.extend(check(Field::Email, email));
            errors.extend(check(Field::Password, &input.password));
            errors.extend(check_confirmation(&input.password, confirmation));
            let terms = if input.accept_terms == Some(true) { "true" } else { "" };
            errors.extend(check(Field::AcceptTerms, terms));
        }
        CredentialKind::Reset => {
            errors.extend(check(Field::Token, optional(&input.token)));
            errors.extend(check(Field::Password, &input.password));
            errors.extend(check_confirmation(&input.password, confirmation));
        }
    }

    if !errors.is_empty() {
        tracing::debug!(%kind, violations = errors.len(), "credential rejected");
    }
    ValidationResult::from_errors(input.clone(), errors)
}

/// Validate a comment body; the accepted value is trimmed
pub fn validate_comment(body: &str) -> ValidationResult<String> {
    validate_field(Field::Body, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::TagSet;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 18, 12, 0, 0).unwrap()
    }

    fn valid_draft() -> PostDraft {
        PostDraft::new()
            .with_title("Hello, World")
            .with_slug("hello-world")
            .with_content("First post.")
    }

    #[test]
    fn test_valid_draft_is_accepted() {
        let result = validate_post(&valid_draft(), now());
        assert!(result.is_accepted());
    }

    #[test]
    fn test_empty_title_yields_exactly_one_title_error() {
        let draft = PostDraft::new().with_slug("x").with_content("x");
        let result = validate_post(&draft, now());

        assert_eq!(
            result.errors(),
            &[RuleError::field("title", "Title is required")]
        );
    }

    #[test]
    fn test_all_violations_are_collected() {
        let draft = PostDraft::new()
            .with_title("t".repeat(201))
            .with_slug("Bad Slug")
            .with_featured_image(Some("nope".to_string()))
            .with_meta(Some("m".repeat(61)), Some("d".repeat(161)));
        let result = validate_post(&draft, now());

        let paths: Vec<&str> = result.errors().iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec!["title", "slug", "content", "featured_image", "meta_title", "meta_description"]
        );
    }

    #[test]
    fn test_empty_slug_is_rejected() {
        let draft = valid_draft().with_slug("");
        let result = validate_post(&draft, now());
        assert_eq!(result.errors_for("slug").count(), 1);
    }

    #[test]
    fn test_oversized_tag_set_is_rejected() {
        let raw: Vec<String> = (0..11).map(|i| format!("t{}", i)).collect();
        let tags: TagSet = serde_json::from_value(serde_json::json!(raw)).unwrap();
        let result = validate_post(&valid_draft().with_tags(tags), now());

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].message(), "Maximum 10 tags allowed");
    }

    #[test]
    fn test_normalization() {
        let tags: TagSet = serde_json::from_str(r#"[" rust ", "rust"]"#).unwrap();
        let draft = valid_draft()
            .with_excerpt(Some(String::new()))
            .with_featured_image(Some(String::new()))
            .with_tags(tags)
            .with_scheduled_at(Some("2030-01-01T00:00".to_string()));

        let accepted = validate_post(&draft, now()).value().unwrap();
        assert_eq!(accepted.excerpt, None);
        assert_eq!(accepted.featured_image, None);
        assert_eq!(accepted.tags.into_vec(), vec!["rust"]);
        // ignored for a non-scheduled post
        assert_eq!(accepted.scheduled_at, None);
    }

    #[test]
    fn test_scheduled_requires_timestamp() {
        let draft = valid_draft().with_status(PostStatus::Scheduled);
        let result = validate_post(&draft, now());

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].code(), "CROSS_FIELD_ERROR");
        assert_eq!(result.errors()[0].path(), "scheduled_at");
    }

    #[test]
    fn test_scheduled_rejects_unparseable_and_past() {
        let bad = valid_draft()
            .with_status(PostStatus::Scheduled)
            .with_scheduled_at(Some("soon".to_string()));
        assert!(validate_post(&bad, now()).is_rejected());

        let past = format_instant(now() - Duration::minutes(1));
        let late = valid_draft()
            .with_status(PostStatus::Scheduled)
            .with_scheduled_at(Some(past));
        assert!(validate_post(&late, now()).is_rejected());
    }

    #[test]
    fn test_scheduled_accepts_present_and_future() {
        for at in [now(), now() + Duration::days(2)] {
            let draft = valid_draft()
                .with_status(PostStatus::Scheduled)
                .with_scheduled_at(Some(format_instant(at)));
            let accepted = validate_post(&draft, now()).value().unwrap();
            assert_eq!(accepted.scheduled_at, Some(format_instant(at)));
        }
    }

    #[test]
    fn test_scheduled_at_is_canonicalized() {
        let draft = valid_draft()
            .with_status(PostStatus::Scheduled)
            .with_scheduled_at(Some("2030-01-20T12:30:00+02:00".to_string()));
        let accepted = validate_post(&draft, now()).value().unwrap();
        assert_eq!(accepted.scheduled_at.as_deref(), Some("2030-01-20T10:30:00Z"));
    }

    #[test]
    fn test_register_accepts_valid_input() {
        let input = CredentialInput::register("jas", "jas@example.com", "Password1", "Password1", true);
        assert!(validate_credential(CredentialKind::Register, &input).is_accepted());
    }

    #[test]
    fn test_register_rejects_password_without_uppercase() {
        let input = CredentialInput::register("jas", "jas@example.com", "abc12345", "abc12345", true);
        let result = validate_credential(CredentialKind::Register, &input);

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path(), "password");
        assert_eq!(result.errors()[0].code(), "FIELD_ERROR");
    }

    #[test]
    fn test_register_collects_every_violation() {
        let input = CredentialInput::register("j", "nope", "Password1", "Password2", false);
        let result = validate_credential(CredentialKind::Register, &input);

        let paths: Vec<&str> = result.errors().iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["username", "email", "confirm_password", "accept_terms"]);
    }

    #[test]
    fn test_register_requires_terms_present() {
        let mut input = CredentialInput::register("jas", "jas@example.com", "Password1", "Password1", true);
        input.accept_terms = None;
        let result = validate_credential(CredentialKind::Register, &input);
        assert_eq!(result.errors_for("accept_terms").count(), 1);
    }

    #[test]
    fn test_login_uses_short_password_policy() {
        let input = CredentialInput::login("jas@example.com", "secret");
        assert!(validate_credential(CredentialKind::Login, &input).is_accepted());

        let input = CredentialInput::login("jas@example.com", "12345");
        assert!(validate_credential(CredentialKind::Login, &input).is_rejected());
    }

    #[test]
    fn test_reset_mismatch_attaches_to_confirmation() {
        let input = CredentialInput::reset("tok-1", "Password1", "Password11");
        let result = validate_credential(CredentialKind::Reset, &input);

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path(), "confirm_password");
    }

    #[test]
    fn test_reset_without_token_is_rejected() {
        let input = CredentialInput {
            token: None,
            ..CredentialInput::reset("", "Password1", "Password1")
        };
        let result = validate_credential(CredentialKind::Reset, &input);

        assert!(result.is_rejected());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path(), "token");
        assert_eq!(result.errors()[0].code(), "FIELD_ERROR");

        let blank = CredentialInput::reset("", "Password1", "Password1");
        assert_eq!(validate_credential(CredentialKind::Reset, &blank).errors()[0].path(), "token");

        let valid = CredentialInput::reset("tok-1", "Password1", "Password1");
        assert!(validate_credential(CredentialKind::Reset, &valid).is_accepted());
    }

    #[test]
    fn test_comment() {
        assert_eq!(validate_comment(" Nice post! ").value(), Some("Nice post!".to_string()));
        assert!(validate_comment(" a ").is_rejected());
    }
}
