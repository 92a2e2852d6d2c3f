//! Due command - Report whether a scheduled draft should go live

use std::path::Path;

use super::{render_json, Context};
use crate::domain::{format_instant, is_due, parse_instant};
use crate::errors::Result;
use crate::fs;
use crate::schemas::PostStatus;

/// Print whether the draft at `path` is scheduled and its instant has passed
pub fn run(ctx: &Context, path: &Path) -> Result<()> {
    let draft = fs::read_draft(path)?;

    let publish_at = match draft.status {
        PostStatus::Scheduled => draft.scheduled_at.as_deref().and_then(parse_instant),
        _ => None,
    };
    let due = publish_at.map(|at| is_due(at, ctx.now)).unwrap_or(false);

    let verdict = serde_json::json!({
        "status": draft.status,
        "publish_at": publish_at.map(format_instant),
        "now": format_instant(ctx.now),
        "due": due,
    });
    println!("{}", render_json(ctx, &verdict)?);
    Ok(())
}
