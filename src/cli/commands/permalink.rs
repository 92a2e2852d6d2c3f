//! Permalink command - Print the public URL for a slug

use super::{report, Context};
use crate::auth::permalink;
use crate::domain::validate_slug;
use crate::errors::Result;

pub fn run(ctx: &Context, slug: &str) -> Result<()> {
    let url = report(ctx, validate_slug(slug).map(|s| permalink(&ctx.config, &s)))?;
    tracing::debug!(%url, "permalink built");
    Ok(())
}
