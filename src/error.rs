use crate::core::config::ConfigError;
use crate::core::state::StartupError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Startup(StartupError),
    Config(ConfigError),
    Flag(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<StartupError> for ShellError {
    fn from(err: StartupError) -> Self {
        ShellError::Startup(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Startup(e) => write!(f, "{}", e),
            ShellError::Config(e) => write!(f, "Config error: {}", e),
            ShellError::Flag(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Readline(e) => Some(e),
            ShellError::Startup(e) => Some(e),
            ShellError::Config(e) => Some(e),
            ShellError::Flag(_) => None,
        }
    }
}
