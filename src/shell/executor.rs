use tracing::debug;

use crate::core::commands::{BuiltinDispatcher, Context, DispatchResult};
use crate::core::terminal::TerminalControl;
use crate::input::{tokenize, trim, ParseError};

/// Trim, tokenize and dispatch one raw line.
///
/// A line that names no builtin is reported on `ctx.err`; running external
/// programs is not supported.
pub fn process_line<T: TerminalControl>(
    dispatcher: &BuiltinDispatcher,
    ctx: &mut Context<'_, T>,
    line: &str,
) -> Result<DispatchResult, ParseError> {
    let args = tokenize(trim(line))?;

    let result = dispatcher.dispatch(ctx, &args);
    if result == DispatchResult::NotBuiltin {
        if let Some(name) = args.command() {
            debug!(command = name, "no external command support");
            let _ = writeln!(ctx.err, "conch: {}: command not found", name);
        }
    }
    Ok(result)
}
