//! State transition logic
//!
//! Pure functions for moving a post between lifecycle states.

use chrono::{DateTime, Utc};

use crate::schemas::{PostDraft, PostStatus};

use super::clock::parse_instant;
use super::schema::{content_errors, normalize_post};
use super::states::can_transition;
use super::validation::{RuleError, ValidationResult};

/// Move a post to `target`.
///
/// This function:
/// - Never mutates the input draft
/// - Validates the whole draft before publishing or scheduling
/// - Collects every violated precondition rather than stopping at the first
///
/// `scheduled_at` overrides the draft's own requested instant when given.
pub fn transition(
    draft: &PostDraft,
    target: PostStatus,
    scheduled_at: Option<&str>,
    now: DateTime<Utc>,
) -> ValidationResult<PostDraft> {
    let from = draft.status;
    if !can_transition(from, target) {
        return ValidationResult::Rejected(vec![RuleError::transition(
            from,
            target,
            "a published post can only be unpublished",
        )]);
    }

    let result = match target {
        PostStatus::Draft => ValidationResult::Accepted(unpublish(draft)),
        PostStatus::Published => publish(draft, now),
        PostStatus::Scheduled => {
            let requested = scheduled_at.or(draft.scheduled_at.as_deref());
            schedule(draft, requested, now)
        }
    };

    match &result {
        ValidationResult::Accepted(_) => {
            tracing::debug!(%from, to = %target, slug = %draft.slug, "post transitioned")
        }
        ValidationResult::Rejected(errors) => {
            tracing::debug!(%from, to = %target, violations = errors.len(), "transition rejected")
        }
    }
    result
}

/// `* -> draft`: always permitted. Drops any pending schedule.
///
/// `published_at` only ever records a real publication, so it is kept.
fn unpublish(draft: &PostDraft) -> PostDraft {
    draft
        .clone()
        .with_status(PostStatus::Draft)
        .with_scheduled_at(None)
}

/// `* -> published`: the draft must validate.
///
/// The publish instant is the first real publication if there was one,
/// then the pending schedule, then `now`.
fn publish(draft: &PostDraft, now: DateTime<Utc>) -> ValidationResult<PostDraft> {
    let errors = content_errors(draft);
    if !errors.is_empty() {
        return ValidationResult::Rejected(errors);
    }

    let scheduled = match draft.status {
        PostStatus::Scheduled => draft.scheduled_at.as_deref().and_then(parse_instant),
        _ => None,
    };
    let published_at = draft.published_at.or(scheduled).unwrap_or(now);
    ValidationResult::Accepted(
        normalize_post(draft, None)
            .with_status(PostStatus::Published)
            .with_published_at(Some(published_at)),
    )
}

/// `* -> scheduled`: needs a parseable, not-past instant and a valid draft.
///
/// The instant lives in `scheduled_at` only; `published_at` is left alone.
fn schedule(
    draft: &PostDraft,
    requested: Option<&str>,
    now: DateTime<Utc>,
) -> ValidationResult<PostDraft> {
    let from = draft.status;
    let mut errors = Vec::new();

    let at = match requested.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => {
            errors.push(RuleError::transition(
                from,
                PostStatus::Scheduled,
                "a publish date is required to schedule a post",
            ));
            None
        }
        Some(raw) => match parse_instant(raw) {
            None => {
                errors.push(RuleError::transition(
                    from,
                    PostStatus::Scheduled,
                    format!("'{}' is not a valid date and time", raw),
                ));
                None
            }
            Some(at) if at < now => {
                errors.push(RuleError::transition(
                    from,
                    PostStatus::Scheduled,
                    "the publish date is in the past",
                ));
                None
            }
            Some(at) => Some(at),
        },
    };

    errors.extend(content_errors(draft));

    match at {
        Some(at) if errors.is_empty() => ValidationResult::Accepted(
            normalize_post(draft, Some(at)).with_status(PostStatus::Scheduled),
        ),
        _ => ValidationResult::Rejected(errors),
    }
}
