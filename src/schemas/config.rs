//! Config schema - Configuration for postflow

use serde::{Deserialize, Serialize};

/// Main configuration for postflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Public origin of the blog (e.g., "https://blog.example.com")
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Path prefix of the public post pages
    #[serde(default = "default_posts_path")]
    pub posts_path: String,

    /// Path of the sign-in page unauthenticated readers are sent to
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Pretty-print JSON command output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_posts_path() -> String {
    "/posts".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            site_url: default_site_url(),
            posts_path: default_posts_path(),
            login_path: default_login_path(),
            pretty: default_pretty(),
        }
    }
}
