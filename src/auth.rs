//! Authentication capability check for protected views
//!
//! Session issuance lives elsewhere; this module only decides whether a
//! request may proceed and where to send it if not.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::schemas::Config;

/// Characters a URI component keeps as-is: alphanumerics and `-_.!~*'()`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Anything that can say whether the current caller is signed in
pub trait AuthGate {
    fn is_authenticated(&self) -> bool;
}

impl AuthGate for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

/// Outcome of guarding a protected path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Send the caller to this sign-in URL
    Redirect(String),
}

/// Guard `requested_path`, redirecting unauthenticated callers to sign in.
pub fn guard(gate: &impl AuthGate, requested_path: &str, config: &Config) -> Access {
    if gate.is_authenticated() {
        Access::Granted
    } else {
        Access::Redirect(login_redirect(config, requested_path))
    }
}

/// Sign-in URL that returns the caller to `requested_path` afterwards
pub fn login_redirect(config: &Config, requested_path: &str) -> String {
    let target = if requested_path.is_empty() { "/" } else { requested_path };
    format!(
        "{}?redirect={}",
        config.login_path,
        utf8_percent_encode(target, URI_COMPONENT)
    )
}

/// Public URL of a post on the read path
pub fn permalink(config: &Config, slug: &str) -> String {
    format!(
        "{}{}/{}",
        config.site_url.trim_end_matches('/'),
        config.posts_path.trim_end_matches('/'),
        slug
    )
}
