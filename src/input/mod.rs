mod completer;
pub mod history;
pub mod tokenizer;
pub mod trim;

pub use completer::ShellCompleter;
pub use history::History;
pub use tokenizer::{tokenize, ArgumentVector, ParseError, MAX_ARGS};
pub use trim::trim;
