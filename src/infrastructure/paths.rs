//! Filesystem locations used by the crate.

use std::path::{Path, PathBuf};

/// Returns the data directory for Ancora files (span exports).
///
/// Resolves to the platform local data directory (`~/.local/share/ancora` on
/// Linux), falling back to `./.ancora` when no home directory is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from(".ancora"), |dir| dir.join("ancora"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or with no known home directory, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use ancora::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/ancora.toml"), std::path::PathBuf::from("/etc/ancora.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => Path::new(p).to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_crate_name() {
        let dir = get_data_dir();
        assert!(dir.ends_with("ancora") || dir.ends_with(".ancora"));
    }

    #[test]
    fn tilde_expands_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/palettes/x.toml"), home.join("palettes/x.toml"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/a"), PathBuf::from("/tmp/a"));
    }
}
