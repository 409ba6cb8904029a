use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub name: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn matches(&self, arg: &str) -> bool {
        arg == self.short || arg == self.long || self.aliases.contains(&arg)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            Flag {
                name: "help",
                short: "-h",
                long: "--help",
                aliases: &[],
                description: "Print this help message",
                takes_value: false,
                value: None,
            },
            Flag {
                name: "version",
                short: "-v",
                long: "--version",
                aliases: &["-V"],
                description: "Show version information",
                takes_value: false,
                value: None,
            },
            Flag {
                name: "config",
                short: "-c",
                long: "--config",
                aliases: &[],
                description: "Read startup settings from FILE instead of ~/.conchrc",
                takes_value: true,
                value: None,
            },
            Flag {
                name: "debug",
                short: "-d",
                long: "--debug",
                aliases: &[],
                description: "Enable debug logging",
                takes_value: false,
                value: None,
            },
        ];

        Flags { flags }
    }

    /// Parse left to right, stopping at the first bad argument. Options seen
    /// before it stay set.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let flag = self
                .flags
                .iter_mut()
                .find(|flag| flag.matches(arg))
                .ok_or_else(|| ShellError::Flag(format!("invalid option -- '{}'", arg)))?;

            if flag.takes_value {
                let value = iter.next().ok_or_else(|| {
                    ShellError::Flag(format!("option '{}' requires a value", arg))
                })?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
    }

    pub fn usage(program: &str) -> String {
        format!("Usage: {} [-v] [-h] [-d] [-c <file>]", program)
    }

    pub fn print_help(&self, program: &str) {
        println!("{}", Self::usage(program));
        println!("\nOptions:");
        for flag in &self.flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
