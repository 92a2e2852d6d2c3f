//! Editorial rule engine: field rules, slugs, tags, schemas and the publish workflow

mod clock;
mod fields;
mod schema;
mod slug;
mod states;
mod tags;
mod transitions;
mod validation;


pub use clock::{parse_instant, Clock, FixedClock, SystemClock};
pub use fields::{
    check_confirmation, validate_email, validate_field, validate_login_password,
    validate_password, validate_slug, validate_url, validate_username, Field, FieldRule, RuleKind,
    COMMENT_MIN, EXCERPT_MAX, LOGIN_PASSWORD_MIN, META_DESCRIPTION_MAX, META_TITLE_MAX,
    PASSWORD_MIN, TITLE_MAX, USERNAME_MAX, USERNAME_MIN,
};
pub use schema::{format_instant, validate_comment, validate_credential, validate_post};
pub use slug::generate_slug;
pub use states::{
    can_transition, get_allowed_next_states, is_due, is_terminal_state, POST_STATES,
};
pub use tags::{add_tag, normalize_tags, remove_tag, toggle_filter, MAX_TAGS};
pub use transitions::transition;
pub use validation::{RuleError, ValidationResult};
