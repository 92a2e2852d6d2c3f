//! File system utilities for postflow
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_draft, read_json, write_draft, write_json};
pub use paths::{find_project_root, get_config_path, get_postflow_dir, resolve_cwd};
