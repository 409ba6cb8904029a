use std::fmt;
use std::io;

use libc::pid_t;
use tracing::{debug, warn};

use super::terminal::{TerminalControl, Tty};

/// Terminal setup failed while a terminal was present.
///
/// The shell must not continue: the terminal may already be in a state that
/// could not be restored later.
#[derive(Debug)]
pub enum StartupError {
    Snapshot(io::Error),
    Apply(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Snapshot(e) => write!(f, "tcgetattr: {}", e),
            StartupError::Apply(e) => write!(f, "tcsetattr: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Snapshot(e) | StartupError::Apply(e) => Some(e),
        }
    }
}

/// Restoring the saved terminal modes failed at session end.
#[derive(Debug)]
pub struct TeardownWarning(pub io::Error);

impl fmt::Display for TeardownWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tcsetattr: {}", self.0)
    }
}

impl std::error::Error for TeardownWarning {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    NonInteractive,
    Interactive,
}

/// One interactive session's hold on the terminal.
///
/// In interactive mode the terminal modes found at startup are saved and
/// put back exactly once: by [`ShellState::teardown`], or on drop if
/// teardown never ran.
pub struct ShellState<T: TerminalControl = Tty> {
    terminal: T,
    mode: SessionMode,
    pgid: Option<pid_t>,
    saved: Option<T::Modes>,
}

impl ShellState<Tty> {
    pub fn init() -> Result<Self, StartupError> {
        Self::with_terminal(Tty::stdin())
    }
}

impl<T: TerminalControl> ShellState<T> {
    pub fn with_terminal(mut terminal: T) -> Result<Self, StartupError> {
        if !terminal.is_terminal() {
            debug!("input is not a terminal, running non-interactively");
            return Ok(Self {
                terminal,
                mode: SessionMode::NonInteractive,
                pgid: None,
                saved: None,
            });
        }

        let pgid = terminal.process_group();
        let saved = terminal.get_modes().map_err(StartupError::Snapshot)?;
        let working = terminal.working_modes(&saved);
        terminal.set_modes(&working).map_err(StartupError::Apply)?;
        debug!(pgid, "terminal modes saved, running interactively");

        Ok(Self {
            terminal,
            mode: SessionMode::Interactive,
            pgid: Some(pgid),
            saved: Some(saved),
        })
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == SessionMode::Interactive
    }

    pub fn process_group(&self) -> Option<pid_t> {
        self.pgid
    }

    /// Modes captured at startup, until they have been restored.
    pub fn saved_modes(&self) -> Option<&T::Modes> {
        self.saved.as_ref()
    }

    /// Put the terminal back the way it was found. Later calls do nothing.
    pub fn teardown(&mut self) -> Result<(), TeardownWarning> {
        let Some(saved) = self.saved.take() else {
            return Ok(());
        };

        self.terminal.set_modes(&saved).map_err(TeardownWarning)?;
        debug!("terminal modes restored");
        Ok(())
    }
}

impl<T: TerminalControl> Drop for ShellState<T> {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            warn!("failed to restore terminal modes: {}", e);
        }
    }
}
