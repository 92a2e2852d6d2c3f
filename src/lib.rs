//! Postflow - The editorial workflow engine behind a blogging platform
//!
//! This library decides whether authored content is accepted and how a
//! post's lifecycle evolves:
//! - Field validators for post, account and comment input
//! - Slug generation and the bounded tag taxonomy
//! - Post and credential schemas that collect every violation in one pass
//! - The draft / scheduled / published state machine with time-gated activation
//!
//! Storage, rendering and session issuance are left to the calling layer.

pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use domain::{RuleError, ValidationResult};
pub use errors::{PostflowError, Result};
pub use schemas::{Config, CredentialInput, CredentialKind, PostDraft, PostStatus, TagSet};
