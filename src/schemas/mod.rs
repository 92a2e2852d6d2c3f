//! Schema types for postflow
//!
//! Serde data types exchanged with the calling layer as JSON.

mod config;
mod credential;
mod post;
mod tags;

pub use config::Config;
pub use credential::{CredentialInput, CredentialKind};
pub use post::{PostDraft, PostStatus};
pub use tags::TagSet;
