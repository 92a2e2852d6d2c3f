//! CLI module for postflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Postflow - Validate, tag and schedule blog posts from the command line
#[derive(Parser, Debug)]
#[command(name = "postflow")]
#[command(version)]
#[command(about = "Validate, tag and schedule blog posts from the command line")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Read configuration from this file instead of .postflow/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate time rules at this instant instead of the system clock
    #[arg(long, global = true, value_name = "RFC3339")]
    pub now: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a slug for a title
    Slug {
        /// Post title (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Validate a single field value
    Check {
        /// Field name (title, slug, email, password, login_password, ...)
        field: String,

        /// Raw value
        value: String,
    },

    /// Validate a post draft file
    Validate {
        /// Path to the draft JSON file
        draft: PathBuf,
    },

    /// Validate an account form submission
    Credential {
        /// Form kind (login, register, reset)
        kind: String,

        /// Path to the credential JSON file
        input: PathBuf,
    },

    /// Validate a comment body
    Comment {
        /// Comment text
        text: String,
    },

    /// Add or remove tags on a draft
    Tags {
        /// Path to the draft JSON file
        draft: PathBuf,

        /// Tag to add (repeatable)
        #[arg(long = "add", value_name = "TAG")]
        add: Vec<String>,

        /// Tag to remove (repeatable)
        #[arg(long = "remove", value_name = "TAG")]
        remove: Vec<String>,

        /// Write the result back to the draft file
        #[arg(long)]
        write: bool,
    },

    /// Move a draft to another lifecycle status
    Transition {
        /// Path to the draft JSON file
        draft: PathBuf,

        /// Target status (draft, scheduled, published)
        status: String,

        /// Publish instant for scheduling
        #[arg(long)]
        at: Option<String>,

        /// Write the result back to the draft file
        #[arg(long)]
        write: bool,
    },

    /// Report whether a scheduled draft is due for publication
    Due {
        /// Path to the draft JSON file
        draft: PathBuf,
    },

    /// Print the public URL for a slug
    Permalink {
        /// Post slug
        slug: String,
    },
}
