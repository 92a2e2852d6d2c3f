//! Publish lifecycle state definitions
//!
//! draft ⇄ scheduled → published, draft → published, and any state → draft.
//! A published post can only be unpublished or re-published in place.

use chrono::{DateTime, Utc};

use crate::schemas::PostStatus;

/// Every lifecycle state, in the order a post normally moves through them
pub const POST_STATES: &[PostStatus] = &[
    PostStatus::Draft,
    PostStatus::Scheduled,
    PostStatus::Published,
];

/// Returns the states a post in `current` may be moved to.
///
/// Preconditions (validation, a publish date) are checked separately by
/// `transition`; this is only the shape of the state machine.
pub fn get_allowed_next_states(current: PostStatus) -> Vec<PostStatus> {
    match current {
        PostStatus::Draft | PostStatus::Scheduled => POST_STATES.to_vec(),
        PostStatus::Published => vec![PostStatus::Draft, PostStatus::Published],
    }
}

/// Whether the state machine has an edge from `from` to `to`
pub fn can_transition(from: PostStatus, to: PostStatus) -> bool {
    get_allowed_next_states(from).contains(&to)
}

/// Check if a state is the terminal state (published).
pub fn is_terminal_state(state: PostStatus) -> bool {
    state == PostStatus::Published
}

/// Whether a scheduled publish instant has been reached
pub fn is_due(scheduled_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    scheduled_at <= now
}
