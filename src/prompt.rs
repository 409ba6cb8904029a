use std::env;

pub const PROMPT_VAR: &str = "MY_PROMPT";
pub const DEFAULT_PROMPT: &str = "shell> ";

/// The prompt named by environment variable `var`, or `default` when it is
/// unset or empty.
pub fn resolve(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or_else(|| default.to_string())
}
