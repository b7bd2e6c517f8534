//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tabletree";
const APPLICATION: &str = "tabletree";

/// File name used when no log path is given.
const LOG_FILE_NAME: &str = "tabletree.log";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/tabletree` or `~/.cache/tabletree`
/// - macOS: `~/Library/Caches/dev.tabletree.tabletree`
/// - Windows: `C:\Users\<User>\AppData\Local\tabletree\tabletree\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the default log file path, creating its directory.
///
/// Falls back to the working directory when the cache directory is
/// unknown or cannot be created.
pub fn log_file() -> PathBuf {
    match cache_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join(LOG_FILE_NAME),
        _ => PathBuf::from(LOG_FILE_NAME),
    }
}
