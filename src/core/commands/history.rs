use super::{Builtin, BuiltinError, Context};
use crate::core::terminal::TerminalControl;

/// Lists every recorded line as `<index>  <line>`, oldest first.
///
/// A listing that cannot be written is reported on the error stream; the
/// command itself still succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for HistoryCommand {
    fn execute<T: TerminalControl>(
        &self,
        ctx: &mut Context<'_, T>,
        _args: &[String],
    ) -> Result<(), BuiltinError> {
        for (index, line) in ctx.history.iter().enumerate() {
            if let Err(e) = writeln!(ctx.out, "{}  {}", index + 1, line) {
                let _ = writeln!(ctx.err, "history: {}", e);
                break;
            }
        }
        Ok(())
    }
}
