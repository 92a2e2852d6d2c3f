//! Comment command - Validate a comment body

use super::{report, Context};
use crate::domain::validate_comment;
use crate::errors::Result;

pub fn run(ctx: &Context, text: &str) -> Result<()> {
    report(ctx, validate_comment(text))?;
    Ok(())
}
