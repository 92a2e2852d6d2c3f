//! Tags command - Add or remove tags on a draft

use std::path::Path;

use super::{render_json, Context};
use crate::domain::{add_tag, remove_tag, MAX_TAGS};
use crate::errors::Result;
use crate::fs;

/// Apply removals then additions to the draft's tags and print the result
pub fn run(ctx: &Context, path: &Path, add: &[String], remove: &[String], write: bool) -> Result<()> {
    let draft = fs::read_draft(path)?;

    let tags = remove.iter().fold(draft.tags.clone(), |set, tag| remove_tag(&set, tag));
    let tags = add.iter().fold(tags, |set, tag| {
        let next = add_tag(&set, tag);
        if next == set && !tag.trim().is_empty() && !set.contains(tag.trim()) {
            tracing::warn!(tag = %tag.trim(), max = MAX_TAGS, "tag limit reached, not added");
        }
        next
    });

    let updated = draft.with_tags(tags);
    println!("{}", render_json(ctx, &updated.tags)?);

    if write {
        fs::write_draft(path, &updated)?;
        tracing::info!(path = %path.display(), tags = updated.tags.len(), "tags saved");
    }
    Ok(())
}
