//! Check command - Validate a single field value

use super::{report, Context};
use crate::domain::{validate_field, Field};
use crate::errors::{PostflowError, Result};

/// Validate `value` as `field` and print the outcome
pub fn run(ctx: &Context, field: &str, value: &str) -> Result<()> {
    let field: Field = field.parse().map_err(PostflowError::InvalidArgument)?;
    if !field.is_standalone() {
        return Err(PostflowError::InvalidArgument(format!(
            "{} can only be checked as part of a whole form",
            field
        )));
    }
    report(ctx, validate_field(field, value))?;
    Ok(())
}
