//! Path resolution utilities for postflow
//!
//! Locates the project root and the files kept under `.postflow/`.

use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start_cwd` holding a `.postflow` directory.
///
/// Falls back to `start_cwd` itself when no ancestor has one, so commands
/// run with default configuration outside a project.
pub fn find_project_root(start_cwd: &Path) -> PathBuf {
    let mut current = start_cwd.to_path_buf();

    loop {
        if get_postflow_dir(&current).is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return start_cwd.to_path_buf(),
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .postflow directory.
pub fn get_postflow_dir(root: &Path) -> PathBuf {
    root.join(".postflow")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_postflow_dir(root).join("config.json")
}
