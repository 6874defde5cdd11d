//! Filesystem path utilities.
//!
//! This module resolves the data directory used for the optional trace log
//! and expands tilde-prefixed paths from configuration values.

use std::path::PathBuf;

/// Returns the data directory for airwatch files.
///
/// Resolves to `$XDG_DATA_HOME/airwatch` when set, otherwise
/// `$HOME/.local/share/airwatch`, and falls back to a relative
/// `.airwatch` directory when neither variable is available.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("airwatch");
        }
    }

    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => {
            PathBuf::from(home).join(".local").join("share").join("airwatch")
        }
        _ => PathBuf::from(".airwatch"),
    }
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged; when `$HOME` is
/// unset the original path is returned as-is.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_prefix() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_tilde("~/themes/x.toml"), format!("{home}/themes/x.toml"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn test_absolute_path_unchanged() {
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }

    #[test]
    fn test_data_dir_ends_with_crate_name() {
        assert!(data_dir().ends_with("airwatch") || data_dir().ends_with(".airwatch"));
    }
}
