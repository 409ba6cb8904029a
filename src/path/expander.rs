use std::env;
use std::path::{Path, PathBuf};

/// Resolves `~` and `~/...` against the `HOME` environment variable.
///
/// `~user` forms are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expand `path`, or `None` when it needs `HOME` and `HOME` is unset or empty.
    pub fn expand(&self, path: &str) -> Option<PathBuf> {
        if path == "~" {
            return self.home_dir();
        }

        match path.strip_prefix("~/") {
            Some(rest) => {
                let mut home = self.home_dir()?;
                for part in rest.split('/').filter(|p| !p.is_empty()) {
                    home.push(part);
                }
                Some(home)
            }
            None => Some(Path::new(path).to_path_buf()),
        }
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
    }
}
