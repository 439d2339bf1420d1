//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Number of directories between the executable and the repository root.
///
/// The binary is expected to live at `<repo>/.github/scripts/docprep`.
const EXE_DEPTH: usize = 2;

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/book/src/chapter/   ← start
/// /home/user/book/docprep.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Repository root derived from the executable location
///
/// `exe` is the path of the running binary; the root is [`EXE_DEPTH`]
/// levels above the directory that holds it. Falls back to the topmost
/// ancestor reached when the path is too shallow.
pub fn anchor_from_exe(exe: &Path) -> PathBuf {
    let mut dir = exe.parent().unwrap_or(exe);
    for _ in 0..EXE_DEPTH {
        match dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => dir = parent,
            _ => break,
        }
    }
    dir.to_path_buf()
}

// ============================================================================
// tests
// ============================================================================
