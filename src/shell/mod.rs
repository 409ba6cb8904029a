use std::io;

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use tracing::{debug, warn};

mod executor;

pub use executor::process_line;

use crate::{
    core::{
        commands::{BuiltinDispatcher, Context},
        config::Config,
        state::ShellState,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::{History, ShellCompleter},
};

pub struct Shell {
    editor: Editor<ShellCompleter, DefaultHistory>,
    state: ShellState,
    history: History,
    dispatcher: BuiltinDispatcher,
    highlighter: SyntaxHighlighter,
    prompt: String,
}

impl Shell {
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        apply_config(config);
        let prompt = config.prompt();

        let state = ShellState::init()?;
        let highlighter = SyntaxHighlighter::for_session(state.is_interactive());
        let dispatcher = BuiltinDispatcher::new();

        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(dispatcher.names(), highlighter)));

        Ok(Shell {
            editor,
            state,
            history: History::new(),
            dispatcher,
            highlighter,
            prompt,
        })
    }

    /// Read and run lines until end of input, then give the terminal back.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let result = self.read_loop();

        if let Err(e) = self.state.teardown() {
            eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
        }
        result
    }

    fn read_loop(&mut self) -> Result<(), ShellError> {
        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    if self.history.add(&line) {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            warn!("couldn't add to line editor history: {}", e);
                        }
                    }
                    self.execute_line(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("line discarded by interrupt");
                    continue;
                }
                Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    // the bad line is already consumed
                    debug!("skipping line that is not valid UTF-8");
                    self.report_parse_failure(&e);
                }
                Err(ReadlineError::Eof) => {
                    debug!("end of input");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn execute_line(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        let mut ctx = Context {
            state: &mut self.state,
            history: &self.history,
            out: &mut stdout,
            err: &mut stderr,
        };

        let result = process_line(&self.dispatcher, &mut ctx, line);
        let _ = ctx.out.flush();

        if let Err(e) = result {
            self.report_parse_failure(&e);
        }
    }

    fn report_parse_failure(&self, e: &dyn std::fmt::Display) {
        let message = format!("Failed to parse command: {}", e);
        eprintln!("{}", self.highlighter.highlight_error(&message));
    }
}

fn apply_config(config: &Config) {
    let skipped = match config.load() {
        Ok(skipped) => skipped,
        Err(e) => vec![e],
    };

    for e in skipped {
        eprintln!("conch: {}", e);
    }
}
