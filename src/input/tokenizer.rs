use std::fmt;

/// Upper bound on the number of tokens accepted from one line.
pub const MAX_ARGS: usize = 100;

const SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    TooManyArguments { limit: usize, found: usize },
    AllocationFailed,
    InteriorNul { position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooManyArguments { limit, found } => {
                write!(f, "too many arguments: {} given, at most {} allowed", found, limit)
            }
            ParseError::AllocationFailed => write!(f, "out of memory while parsing"),
            ParseError::InteriorNul { position } => {
                write!(f, "unexpected NUL byte at offset {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::collections::TryReserveError> for ParseError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ParseError::AllocationFailed
    }
}

/// One parsed command line: the command word followed by its arguments.
///
/// Every element is an owned, NUL-free string. Dropping the vector releases
/// all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The command word, if any.
    pub fn command(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Everything after the command word.
    pub fn arguments(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.args.iter()
    }
}

impl<'a> IntoIterator for &'a ArgumentVector {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl IntoIterator for ArgumentVector {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

/// Split a trimmed line into an [`ArgumentVector`] on runs of spaces.
///
/// Only the space character separates tokens; tabs and other whitespace stay
/// inside a token. Lines with more than [`MAX_ARGS`] tokens are rejected
/// whole, and on any failure nothing allocated so far escapes.
pub fn tokenize(line: &str) -> Result<ArgumentVector, ParseError> {
    if let Some(position) = line.find('\0') {
        return Err(ParseError::InteriorNul { position });
    }

    let found = line.split(SEPARATOR).filter(|t| !t.is_empty()).count();
    if found > MAX_ARGS {
        return Err(ParseError::TooManyArguments {
            limit: MAX_ARGS,
            found,
        });
    }

    let mut args = Vec::new();
    args.try_reserve_exact(found)?;

    for token in line.split(SEPARATOR).filter(|t| !t.is_empty()) {
        let mut owned = String::new();
        owned.try_reserve_exact(token.len())?;
        owned.push_str(token);
        args.push(owned);
    }

    Ok(ArgumentVector { args })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(args: &ArgumentVector) -> Vec<&str> {
        args.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_tokenize_empty() {
        let args = tokenize("").unwrap();
        assert!(args.is_empty());
        assert_eq!(args.command(), None);
        assert!(args.arguments().is_empty());
    }

    #[test]
    fn test_tokenize_collapses_repeated_separators() {
        let args = tokenize("cd  /tmp").unwrap();
        assert_eq!(words(&args), ["cd", "/tmp"]);
    }

    #[test]
    fn test_tokenize_only_splits_on_space() {
        let args = tokenize("echo a\tb").unwrap();
        assert_eq!(words(&args), ["echo", "a\tb"]);
    }

    #[test]
    fn test_tokenize_leading_and_trailing_spaces() {
        let args = tokenize("  history  ").unwrap();
        assert_eq!(words(&args), ["history"]);
    }

    #[test]
    fn test_command_and_arguments() {
        let args = tokenize("cd /var/log extra").unwrap();
        assert_eq!(args.command(), Some("cd"));
        assert_eq!(args.arguments(), ["/var/log", "extra"]);
        assert_eq!(args.get(2), Some("extra"));
        assert_eq!(args.get(3), None);
    }

    #[test]
    fn test_tokenize_at_limit() {
        let line = vec!["x"; MAX_ARGS].join(" ");
        let args = tokenize(&line).unwrap();
        assert_eq!(args.len(), MAX_ARGS);
    }

    #[test]
    fn test_tokenize_over_limit_is_rejected() {
        let line = vec!["x"; MAX_ARGS + 1].join(" ");
        assert_eq!(
            tokenize(&line),
            Err(ParseError::TooManyArguments {
                limit: MAX_ARGS,
                found: MAX_ARGS + 1,
            })
        );
    }

    #[test]
    fn test_tokenize_rejects_nul() {
        assert_eq!(
            tokenize("cd /tmp\0x"),
            Err(ParseError::InteriorNul { position: 7 })
        );
    }

    #[test]
    fn test_tokens_are_owned() {
        let args = {
            let line = String::from("exit now");
            tokenize(&line).unwrap()
        };
        let owned: Vec<String> = args.into_iter().collect();
        assert_eq!(owned, ["exit", "now"]);
    }

    #[test]
    fn test_parse_error_display() {
        let errors = vec![
            ParseError::TooManyArguments { limit: 1, found: 2 },
            ParseError::AllocationFailed,
            ParseError::InteriorNul { position: 0 },
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
