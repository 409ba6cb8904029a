use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

mod loader;
mod paths;

use loader::ConfigLoader;
pub use paths::ConfigPaths;

use crate::prompt;

#[derive(Debug)]
pub struct Config {
    paths: ConfigPaths,
    prompt_var: String,
    default_prompt: String,
}

impl Config {
    pub fn new(rc_override: Option<PathBuf>) -> Self {
        Config {
            paths: ConfigPaths::new(rc_override),
            prompt_var: prompt::PROMPT_VAR.to_string(),
            default_prompt: prompt::DEFAULT_PROMPT.to_string(),
        }
    }

    /// Apply the rc file. Invalid lines are skipped and handed back so the
    /// caller can warn about them.
    pub fn load(&self) -> Result<Vec<ConfigError>, ConfigError> {
        ConfigLoader::new(&self.paths).load_configs()
    }

    pub fn rc_path(&self) -> Option<&Path> {
        self.paths.rc_path.as_deref()
    }

    pub fn prompt_var(&self) -> &str {
        &self.prompt_var
    }

    pub fn default_prompt(&self) -> &str {
        &self.default_prompt
    }

    pub fn prompt(&self) -> String {
        prompt::resolve(&self.prompt_var, &self.default_prompt)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: io::Error,
    },
    InvalidLine {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::InvalidLine {
                path,
                line,
                content,
            } => write!(
                f,
                "{}:{}: unrecognized line: {}",
                path.display(),
                line,
                content
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::InvalidLine { .. } => None,
        }
    }
}
