//! Credential schema - Request-scoped account input for login, registration and reset

use serde::{Deserialize, Serialize};

/// Which account form a credential submission comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    /// Email and password sign-in
    Login,
    /// New account registration
    Register,
    /// Password reset confirmation
    Reset,
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialKind::Login => write!(f, "login"),
            CredentialKind::Register => write!(f, "register"),
            CredentialKind::Reset => write!(f, "reset"),
        }
    }
}

impl std::str::FromStr for CredentialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(CredentialKind::Login),
            "register" => Ok(CredentialKind::Register),
            "reset" => Ok(CredentialKind::Reset),
            _ => Err(format!("Unknown credential kind: {}", s)),
        }
    }
}

/// Account form input. Never persisted; fields not used by a form are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub password: String,

    /// Repeated password (registration and reset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,

    /// Terms-of-service acceptance (registration); absent counts as not accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_terms: Option<bool>,

    /// Token from the reset link (reset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CredentialInput {
    /// Input for the login form
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        CredentialInput {
            email: Some(email.into()),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Input for the registration form
    pub fn register(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        accept_terms: bool,
    ) -> Self {
        CredentialInput {
            username: Some(username.into()),
            email: Some(email.into()),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
            accept_terms: Some(accept_terms),
            token: None,
        }
    }

    /// Input for the password reset form
    pub fn reset(
        token: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        CredentialInput {
            token: Some(token.into()),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
            ..Default::default()
        }
    }
}
