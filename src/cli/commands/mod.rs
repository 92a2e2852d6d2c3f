//! CLI command implementations

pub mod check;
pub mod comment;
pub mod credential;
pub mod due;
pub mod permalink;
pub mod slug;
pub mod tags;
pub mod transition;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{parse_instant, Clock, FixedClock, SystemClock, ValidationResult};
use crate::errors::{PostflowError, Result};
use crate::schemas::Config;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub now: DateTime<Utc>,
}

/// Pick the clock commands run against: frozen at `--now` when given.
pub fn clock_for(now: Option<&str>) -> Result<Box<dyn Clock>> {
    match now {
        Some(raw) => {
            let at = parse_instant(raw).ok_or_else(|| {
                PostflowError::InvalidArgument(format!("--now is not a valid instant: {}", raw))
            })?;
            Ok(Box::new(FixedClock(at)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Render a value as JSON, honoring the `pretty` setting
pub fn render_json<T: Serialize>(ctx: &Context, value: &T) -> Result<String> {
    let rendered = if ctx.config.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| PostflowError::InvalidJson(e.to_string()))
}

/// Print a validation outcome and turn a rejection into an error.
pub fn report<T: Serialize>(ctx: &Context, result: ValidationResult<T>) -> Result<T> {
    println!("{}", render_json(ctx, &result)?);
    result.into_result().map_err(PostflowError::Rejected)
}
