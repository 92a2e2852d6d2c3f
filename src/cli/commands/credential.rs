//! Credential command - Validate an account form submission

use std::path::Path;

use super::{render_json, Context};
use crate::domain::validate_credential;
use crate::errors::{PostflowError, Result};
use crate::fs;
use crate::schemas::{CredentialInput, CredentialKind};

/// Validate the credential input at `path` as a `kind` form.
///
/// Only the verdict and violations are printed; passwords are never echoed.
pub fn run(ctx: &Context, kind: &str, path: &Path) -> Result<()> {
    let kind: CredentialKind = kind.parse().map_err(PostflowError::InvalidArgument)?;
    let input: CredentialInput = fs::read_json(path)?;

    let errors = validate_credential(kind, &input).into_result().err().unwrap_or_default();
    let verdict = serde_json::json!({
        "kind": kind,
        "accepted": errors.is_empty(),
        "errors": errors,
    });
    println!("{}", render_json(ctx, &verdict)?);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PostflowError::Rejected(errors))
    }
}
