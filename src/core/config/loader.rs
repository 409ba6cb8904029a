use std::borrow::Cow;
use std::env;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::{ConfigError, ConfigPaths};

/// Applies an rc file: `export NAME=VALUE` lines, blank lines and `#` comments.
pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Apply the rc file, returning the lines that were skipped as invalid.
    pub fn load_configs(&self) -> Result<Vec<ConfigError>, ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            debug!("no home directory, skipping rc file");
            return Ok(Vec::new());
        };

        match self.source_if_exists(path) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == io::ErrorKind::NotFound && !self.paths.explicit =>
            {
                debug!(path = %path.display(), "no rc file");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn source_if_exists(&self, path: &Path) -> Result<Vec<ConfigError>, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading rc file");

        let mut skipped = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if !self.process_line(line) {
                skipped.push(ConfigError::InvalidLine {
                    path: path.to_path_buf(),
                    line: index + 1,
                    content: line.to_string(),
                });
            }
        }
        Ok(skipped)
    }

    fn process_line(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return true;
        }

        match line.strip_prefix("export ") {
            Some(var_def) => self.process_env_var(var_def.trim()),
            None => false,
        }
    }

    fn process_env_var(&self, var_def: &str) -> bool {
        let Some((name, value)) = var_def.split_once('=') else {
            return false;
        };

        let name = name.trim();
        let value = strip_quotes(value.trim());
        if name.is_empty() || name.contains(char::is_whitespace) || name.contains('\0') {
            return false;
        }

        let value = expand_value(value);
        if value.contains('\0') {
            return false;
        }

        env::set_var(name, value.as_ref());
        true
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn expand_value(value: &str) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(value);

    for var in ["HOME", "PATH"] {
        let pattern = format!("${}", var);
        if result.contains(&pattern) {
            let replacement = env::var(var).unwrap_or_default();
            result = Cow::Owned(result.replace(&pattern, &replacement));
        }
    }

    result
}
