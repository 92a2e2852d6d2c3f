//! Transition command - Move a draft to another lifecycle status

use std::path::Path;

use super::{report, Context};
use crate::domain::transition;
use crate::errors::{PostflowError, Result};
use crate::fs;
use crate::schemas::PostStatus;

/// Apply the transition and print the updated draft or the violations
pub fn run(ctx: &Context, path: &Path, status: &str, at: Option<&str>, write: bool) -> Result<()> {
    let target: PostStatus = status.parse().map_err(PostflowError::InvalidArgument)?;
    let draft = fs::read_draft(path)?;
    let from = draft.status;

    let updated = report(ctx, transition(&draft, target, at, ctx.now))?;
    tracing::info!(%from, to = %updated.status, slug = %updated.slug, "transition accepted");

    if write {
        fs::write_draft(path, &updated)?;
    }
    Ok(())
}
