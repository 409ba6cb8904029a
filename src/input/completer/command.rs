use rustyline::completion::Pair;

/// Completes the command word from the builtin names.
#[derive(Debug, Clone, Default)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(commands: impl IntoIterator<Item = &'static str>) -> Self {
        let mut commands: Vec<&'static str> = commands.into_iter().collect();
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    pub fn is_command(&self, word: &str) -> bool {
        self.commands.binary_search_by(|cmd| (*cmd).cmp(word)).is_ok()
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
