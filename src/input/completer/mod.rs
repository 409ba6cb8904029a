mod command;
mod path;

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

pub use command::CommandCompleter;
pub use path::PathCompleter;

use crate::highlight::SyntaxHighlighter;

/// Line-editor helper: builtin names for the first word, paths after it.
#[derive(Debug, Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(
        builtins: impl IntoIterator<Item = &'static str>,
        highlighter: SyntaxHighlighter,
    ) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(builtins),
            path_completer: PathCompleter::new(),
            highlighter,
        }
    }

    /// Start offset of the word under the cursor and the candidates for it.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before_cursor = &line[..pos];
        let start = before_cursor.rfind(' ').map_or(0, |i| i + 1);
        let word = &before_cursor[start..];
        let is_first_word = before_cursor[..start].trim().is_empty();

        let matches = if is_first_word {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };
        (start, matches)
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |word| self.command_completer.is_command(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> ShellCompleter {
        ShellCompleter::new(["cd", "exit", "history"], SyntaxHighlighter::plain())
    }

    #[test]
    fn test_first_word_completes_builtins() {
        let (start, matches) = completer().candidates("hi", 2);
        assert_eq!(start, 0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "history ");
    }

    #[test]
    fn test_leading_spaces_still_first_word() {
        let (start, matches) = completer().candidates("   ex", 5);
        assert_eq!(start, 3);
        assert_eq!(matches[0].display, "exit");
    }

    #[test]
    fn test_later_words_complete_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("target")).unwrap();

        let line = format!("cd {}/ta", dir.path().display());
        let (start, matches) = completer().candidates(&line, line.len());
        assert_eq!(start, 3);
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].replacement,
            format!("{}/target/", dir.path().display())
        );
    }
}
