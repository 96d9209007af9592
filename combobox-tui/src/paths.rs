//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "caselaw";
const APPLICATION: &str = "combobox-tui";

/// Log file used when no cache directory can be determined.
pub const FALLBACK_LOG: &str = "combobox-tui.log";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/combobox-tui` or `~/.config/combobox-tui`
/// - macOS: `~/Library/Application Support/dev.caselaw.combobox-tui`
/// - Windows: `C:\Users\<User>\AppData\Roaming\caselaw\combobox-tui\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the optional combobox configuration.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("combobox.json"))
}

/// Get the path to the log file.
pub fn log_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().join("latest.log"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG))
}
