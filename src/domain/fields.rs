//! Field validators
//!
//! Each field carries a fixed list of [`FieldRule`]s. Validating a field runs
//! every rule and collects all failures; an empty value on a mandatory field
//! reports only that it is required.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::validation::{RuleError, ValidationResult};

pub const TITLE_MAX: usize = 200;
pub const EXCERPT_MAX: usize = 300;
pub const META_TITLE_MAX: usize = 60;
pub const META_DESCRIPTION_MAX: usize = 160;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const LOGIN_PASSWORD_MIN: usize = 6;
pub const PASSWORD_MIN: usize = 8;
pub const COMMENT_MIN: usize = 2;

lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();

    static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();

    // local@domain.tld; dot placement in the local part is checked separately
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$"
    ).unwrap();
}

/// Every addressable input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Slug,
    Excerpt,
    Content,
    Tags,
    FeaturedImage,
    MetaTitle,
    MetaDescription,
    ScheduledAt,
    Email,
    Username,
    /// Registration and reset password policy
    Password,
    /// Login password policy
    LoginPassword,
    ConfirmPassword,
    AcceptTerms,
    /// Password reset link token
    Token,
    /// Comment body
    Body,
}

impl Field {
    /// Path errors for this field are reported under
    pub fn path(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Excerpt => "excerpt",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::FeaturedImage => "featured_image",
            Field::MetaTitle => "meta_title",
            Field::MetaDescription => "meta_description",
            Field::ScheduledAt => "scheduled_at",
            Field::Email => "email",
            Field::Username => "username",
            Field::Password | Field::LoginPassword => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::AcceptTerms => "accept_terms",
            Field::Token => "token",
            Field::Body => "body",
        }
    }

    /// Whether the field's rules mean anything for a lone value.
    ///
    /// Tags are checked as a set and a confirmation against its primary
    /// field, so both are only validated as part of a whole form.
    pub fn is_standalone(self) -> bool {
        !matches!(self, Field::Tags | Field::ConfirmPassword)
    }

    /// Whether an empty value means "not provided" rather than a violation
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Field::Excerpt
                | Field::FeaturedImage
                | Field::MetaTitle
                | Field::MetaDescription
                | Field::ScheduledAt
                | Field::Tags
                | Field::ConfirmPassword
        )
    }

    /// Normalize raw input before the rules see it
    pub fn normalize(self, raw: &str) -> String {
        match self {
            Field::Tags | Field::Body => raw.trim().to_string(),
            _ => raw.to_string(),
        }
    }

    /// The rules checked for this field, in reporting order
    pub fn rules(self) -> Vec<FieldRule> {
        use RuleKind::*;
        match self {
            Field::Title => vec![
                FieldRule::new(Required, "Title is required"),
                FieldRule::new(MaxChars(TITLE_MAX), "Title must be at most 200 characters"),
            ],
            Field::Slug => vec![
                FieldRule::new(Required, "Slug is required"),
                FieldRule::new(
                    Pattern(&SLUG_REGEX),
                    "Slug can only contain lowercase letters, numbers, and single hyphens",
                ),
            ],
            Field::Excerpt => vec![FieldRule::new(
                MaxChars(EXCERPT_MAX),
                "Excerpt must be at most 300 characters",
            )],
            Field::Content => vec![FieldRule::new(Required, "Content is required")],
            Field::FeaturedImage => {
                vec![FieldRule::new(AbsoluteUrl, "Featured image must be a valid URL")]
            }
            Field::MetaTitle => vec![FieldRule::new(
                MaxChars(META_TITLE_MAX),
                "Meta title must be at most 60 characters",
            )],
            Field::MetaDescription => vec![FieldRule::new(
                MaxChars(META_DESCRIPTION_MAX),
                "Meta description must be at most 160 characters",
            )],
            Field::ScheduledAt => vec![FieldRule::new(
                Timestamp,
                "Publish date must be a valid date and time",
            )],
            Field::Email => vec![
                FieldRule::new(Required, "Please enter a valid email address."),
                FieldRule::new(Email, "Please enter a valid email address."),
            ],
            Field::Username => vec![
                FieldRule::new(MinChars(USERNAME_MIN), "Username must be at least 3 characters."),
                FieldRule::new(MaxChars(USERNAME_MAX), "Username must be at most 20 characters."),
                FieldRule::new(
                    Pattern(&USERNAME_REGEX),
                    "Username can only contain letters, numbers, hyphens, and underscores.",
                ),
            ],
            Field::Password => vec![
                FieldRule::new(MinChars(PASSWORD_MIN), "Password must be at least 8 characters."),
                FieldRule::new(
                    MixedCase,
                    "Password must contain at least one uppercase letter, one lowercase letter, and one number.",
                ),
            ],
            Field::LoginPassword => vec![FieldRule::new(
                MinChars(LOGIN_PASSWORD_MIN),
                "Password must be at least 6 characters.",
            )],
            Field::AcceptTerms => vec![FieldRule::new(
                Literal("true"),
                "You must accept the terms and conditions.",
            )],
            Field::Token => vec![FieldRule::new(
                Required,
                "The password reset link is invalid or has expired.",
            )],
            Field::Body => vec![FieldRule::new(
                MinChars(COMMENT_MIN),
                "Comment must be at least 2 characters.",
            )],
            // Checked as a whole set or against another field
            Field::Tags | Field::ConfirmPassword => vec![],
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::LoginPassword => write!(f, "login_password"),
            other => write!(f, "{}", other.path()),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "slug" => Ok(Field::Slug),
            "excerpt" => Ok(Field::Excerpt),
            "content" => Ok(Field::Content),
            "tags" => Ok(Field::Tags),
            "featured_image" => Ok(Field::FeaturedImage),
            "meta_title" => Ok(Field::MetaTitle),
            "meta_description" => Ok(Field::MetaDescription),
            "scheduled_at" => Ok(Field::ScheduledAt),
            "email" => Ok(Field::Email),
            "username" => Ok(Field::Username),
            "password" => Ok(Field::Password),
            "login_password" => Ok(Field::LoginPassword),
            "confirm_password" => Ok(Field::ConfirmPassword),
            "accept_terms" => Ok(Field::AcceptTerms),
            "token" => Ok(Field::Token),
            "body" => Ok(Field::Body),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// What a [`FieldRule`] checks
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Value is non-empty
    Required,
    /// At least n characters
    MinChars(usize),
    /// At most n characters
    MaxChars(usize),
    /// Whole value matches the pattern
    Pattern(&'static Regex),
    /// `local@domain.tld`
    Email,
    /// Parses as an absolute URL
    AbsoluteUrl,
    /// Contains a lowercase letter, an uppercase letter and a digit
    MixedCase,
    /// Parses as an instant (see [`super::clock::parse_instant`])
    Timestamp,
    /// Exactly the given text
    Literal(&'static str),
}

/// A named constraint over a single input value
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub kind: RuleKind,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(kind: RuleKind, message: &'static str) -> Self {
        FieldRule { kind, message }
    }

    /// Whether `value` satisfies the rule
    pub fn passes(&self, value: &str) -> bool {
        match self.kind {
            RuleKind::Required => !value.is_empty(),
            RuleKind::MinChars(n) => value.chars().count() >= n,
            RuleKind::MaxChars(n) => value.chars().count() <= n,
            RuleKind::Pattern(re) => re.is_match(value),
            RuleKind::Email => is_email(value),
            RuleKind::AbsoluteUrl => url::Url::parse(value).is_ok(),
            RuleKind::MixedCase => has_mixed_case_and_digit(value),
            RuleKind::Timestamp => super::clock::parse_instant(value).is_some(),
            RuleKind::Literal(expected) => value == expected,
        }
    }
}

fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

fn has_mixed_case_and_digit(value: &str) -> bool {
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    lower && upper && digit
}

/// Run a field's rules and return the failures, without normalizing.
pub(crate) fn check(field: Field, value: &str) -> Vec<RuleError> {
    if value.is_empty() && field.is_optional() {
        return vec![];
    }

    let mut errors = Vec::new();
    for rule in field.rules() {
        if rule.passes(value) {
            continue;
        }
        errors.push(RuleError::field(field.path(), rule.message));
        if matches!(rule.kind, RuleKind::Required) {
            break;
        }
    }
    errors
}

/// Validate a single raw value for live feedback.
///
/// Returns the normalized value, or every rule the value breaks. Fields that
/// are not [`Field::is_standalone`] have no per-value rules and always pass
/// here; callers wanting a verdict on them must validate the whole form.
pub fn validate_field(field: Field, raw: &str) -> ValidationResult<String> {
    let value = field.normalize(raw);
    let errors = check(field, &value);
    ValidationResult::from_errors(value, errors)
}

/// Validate an email address
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    validate_field(Field::Email, raw)
}

/// Validate a username
pub fn validate_username(raw: &str) -> ValidationResult<String> {
    validate_field(Field::Username, raw)
}

/// Validate a password against the registration/reset policy
pub fn validate_password(raw: &str) -> ValidationResult<String> {
    validate_field(Field::Password, raw)
}

/// Validate a password against the login policy
pub fn validate_login_password(raw: &str) -> ValidationResult<String> {
    validate_field(Field::LoginPassword, raw)
}

/// Validate a slug's canonical shape
pub fn validate_slug(raw: &str) -> ValidationResult<String> {
    validate_field(Field::Slug, raw)
}

/// Validate an optional absolute URL; `""` is accepted
pub fn validate_url(raw: &str) -> ValidationResult<String> {
    validate_field(Field::FeaturedImage, raw)
}

/// Check that a confirmation value is byte-equal to its primary value.
///
/// The error is attached to the confirmation field.
pub fn check_confirmation(primary: &str, confirmation: &str) -> Option<RuleError> {
    if primary == confirmation {
        None
    } else {
        Some(RuleError::cross_field(
            Field::ConfirmPassword.path(),
            Field::Password.path(),
            "Passwords don't match",
        ))
    }
}
