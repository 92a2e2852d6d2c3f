//! Slug command - Suggest a slug for a title

use crate::domain::generate_slug;
use crate::errors::Result;

/// Print the slug generated from the words of a title
pub fn run(title: &[String]) -> Result<()> {
    println!("{}", generate_slug(&title.join(" ")));
    Ok(())
}
