use tracing::debug;

use super::{Builtin, BuiltinError, Context};
use crate::core::terminal::TerminalControl;

/// Restores the terminal and ends the process with status 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    fn execute<T: TerminalControl>(
        &self,
        ctx: &mut Context<'_, T>,
        _args: &[String],
    ) -> Result<(), BuiltinError> {
        let _ = ctx.out.flush();

        // process::exit skips destructors, so the terminal is restored here
        if let Err(e) = ctx.state.teardown() {
            let _ = writeln!(ctx.err, "{}", e);
        }
        let _ = ctx.err.flush();

        debug!("exit requested");
        std::process::exit(0);
    }
}
