//! Validate command - Validate a post draft file

use std::path::Path;

use super::{report, Context};
use crate::domain::validate_post;
use crate::errors::Result;
use crate::fs;

/// Validate the draft at `path` and print the normalized draft or the violations
pub fn run(ctx: &Context, path: &Path) -> Result<()> {
    let draft = fs::read_draft(path)?;
    let accepted = report(ctx, validate_post(&draft, ctx.now))?;
    tracing::info!(slug = %accepted.slug, status = %accepted.status, "draft is valid");
    Ok(())
}
