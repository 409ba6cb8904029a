use conch::core::config::Config;
use conch::flags::Flags;
use conch::shell::Shell;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| format!("conch={}", log_level)),
        ))
        .init();
}

fn main() -> ExitCode {
    let program = env::args().next().unwrap_or_else(|| "conch".to_string());
    let args: Vec<String> = env::args().skip(1).collect();

    let mut flags = Flags::new();
    let parsed = flags.parse(&args);

    if flags.is_set("help") {
        flags.print_help(&program);
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!(
            "Shell Version: {}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        );
        return ExitCode::SUCCESS;
    }

    if let Err(e) = parsed {
        eprintln!("{}: {}", program, e);
        eprintln!("{}", Flags::usage(&program));
        return ExitCode::FAILURE;
    }

    init_logging(flags.is_set("debug"));
    tracing::debug!("starting conch {}", env!("CARGO_PKG_VERSION"));

    let config = Config::new(flags.get_value("config").map(PathBuf::from));
    let mut shell = match Shell::new(&config) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("{}: {}", program, e);
            return ExitCode::FAILURE;
        }
    };

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", program, e);
            ExitCode::FAILURE
        }
    }
}
