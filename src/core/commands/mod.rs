use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

mod cd;
mod exit;
mod history;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;

use crate::core::state::ShellState;
use crate::core::terminal::TerminalControl;
use crate::input::{ArgumentVector, History};

#[derive(Debug)]
pub enum BuiltinError {
    MissingArgument,
    MissingHomeDirectory,
    DirectoryChangeFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinError::MissingArgument => write!(f, "missing argument"),
            BuiltinError::MissingHomeDirectory => write!(f, "unable to get home directory"),
            BuiltinError::DirectoryChangeFailed { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BuiltinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuiltinError::DirectoryChangeFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    NotBuiltin,
    Handled(bool),
}

/// Everything a builtin may act on during one dispatch.
pub struct Context<'a, T: TerminalControl> {
    pub state: &'a mut ShellState<T>,
    pub history: &'a History,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

pub trait Builtin {
    fn execute<T: TerminalControl>(
        &self,
        ctx: &mut Context<'_, T>,
        args: &[String],
    ) -> Result<(), BuiltinError>;
}

#[derive(Debug, Clone)]
enum BuiltinType {
    Cd(CdCommand),
    Exit(ExitCommand),
    History(HistoryCommand),
}

impl Builtin for BuiltinType {
    fn execute<T: TerminalControl>(
        &self,
        ctx: &mut Context<'_, T>,
        args: &[String],
    ) -> Result<(), BuiltinError> {
        match self {
            BuiltinType::Cd(cmd) => cmd.execute(ctx, args),
            BuiltinType::Exit(cmd) => cmd.execute(ctx, args),
            BuiltinType::History(cmd) => cmd.execute(ctx, args),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinDispatcher {
    commands: BTreeMap<&'static str, BuiltinType>,
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", BuiltinType::Cd(CdCommand::new()));
        commands.insert("exit", BuiltinType::Exit(ExitCommand::new()));
        commands.insert("history", BuiltinType::History(HistoryCommand::new()));

        Self { commands }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Run `args` if it names a builtin.
    ///
    /// Failures are reported on `ctx.err` and come back as `Handled(false)`;
    /// the session carries on either way. `exit` does not return.
    pub fn dispatch<T: TerminalControl>(
        &self,
        ctx: &mut Context<'_, T>,
        args: &ArgumentVector,
    ) -> DispatchResult {
        let Some(name) = args.command() else {
            return DispatchResult::NotBuiltin;
        };

        let Some(cmd) = self.commands.get(name) else {
            debug!(command = name, "not a builtin");
            return DispatchResult::NotBuiltin;
        };

        debug!(command = name, argc = args.len(), "running builtin");
        match cmd.execute(ctx, args.arguments()) {
            Ok(()) => DispatchResult::Handled(true),
            Err(e) => {
                let _ = writeln!(ctx.err, "{}: {}", name, e);
                DispatchResult::Handled(false)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::core::state::testing::FakeTerminal;

    /// Dispatches one line against a detached terminal, capturing both streams.
    pub struct Harness {
        pub state: ShellState<FakeTerminal>,
        pub history: History,
        pub out: Vec<u8>,
        pub err: Vec<u8>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                state: ShellState::with_terminal(FakeTerminal::detached())
                    .expect("detached terminal never fails"),
                history: History::new(),
                out: Vec::new(),
                err: Vec::new(),
            }
        }

        pub fn dispatch(&mut self, args: &[&str]) -> DispatchResult {
            let line = args.join(" ");
            let args = crate::input::tokenize(&line).expect("test line tokenizes");
            let mut ctx = Context {
                state: &mut self.state,
                history: &self.history,
                out: &mut self.out,
                err: &mut self.err,
            };
            BuiltinDispatcher::new().dispatch(&mut ctx, &args)
        }

        pub fn stdout(&self) -> String {
            String::from_utf8_lossy(&self.out).into_owned()
        }

        pub fn stderr(&self) -> String {
            String::from_utf8_lossy(&self.err).into_owned()
        }
    }
}
