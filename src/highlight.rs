use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A highlighter that leaves every string untouched.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Colour only when talking to a terminal.
    pub fn for_session(interactive: bool) -> Self {
        if interactive {
            Self::new()
        } else {
            Self::plain()
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colour the command word when `is_builtin` accepts it, and `-flags`.
    /// Spacing is preserved so the cursor stays where the user put it.
    pub fn highlight_command(&self, input: &str, is_builtin: impl Fn(&str) -> bool) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut seen_command = false;
        input
            .split(' ')
            .map(|word| {
                if word.is_empty() {
                    return String::new();
                }
                if !seen_command {
                    seen_command = true;
                    if is_builtin(word) {
                        let command_style = Style::builder().foreground(Color::Cyan).bold().build();
                        return word.style(command_style).to_string();
                    }
                    return word.to_string();
                }
                if word.starts_with('-') {
                    let flag_style = Style::builder().foreground(Color::Yellow).build();
                    return word.style(flag_style).to_string();
                }
                word.to_string()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }
}
