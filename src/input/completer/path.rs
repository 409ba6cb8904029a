use std::fs;
use std::path::PathBuf;

use rustyline::completion::Pair;

use crate::path::PathExpander;

#[derive(Debug, Clone, Copy, Default)]
pub struct PathCompleter {
    path_expander: PathExpander,
}

impl PathCompleter {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }

    /// Candidates for the partially typed path `incomplete`.
    ///
    /// Replacements keep the directory part exactly as typed. Directories
    /// get a trailing `/`, files a trailing space. Dotfiles are offered only
    /// when the typed name starts with `.`.
    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = match incomplete.rfind('/') {
            Some(i) => incomplete.split_at(i + 1),
            None => ("", incomplete),
        };

        let Some(dir_to_search) = self.search_dir(dir_part) else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(&dir_to_search) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                if !name.starts_with(file_prefix) {
                    return None;
                }
                if name.starts_with('.') && !file_prefix.starts_with('.') {
                    return None;
                }

                let is_dir = entry.path().is_dir();
                let suffix = if is_dir { "/" } else { " " };
                Some(Pair {
                    display: if is_dir { format!("{}/", name) } else { name.clone() },
                    replacement: format!("{}{}{}", dir_part, name, suffix),
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn search_dir(&self, dir_part: &str) -> Option<PathBuf> {
        if dir_part.is_empty() {
            Some(PathBuf::from("."))
        } else {
            self.path_expander.expand(dir_part)
        }
    }
}
