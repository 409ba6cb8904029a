use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

static PROCESS_ENV: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the working directory or environment, and
/// puts both back when dropped.
pub(crate) struct ProcessEnvGuard {
    home: Option<OsString>,
    prompt: Option<OsString>,
    cwd: Option<PathBuf>,
    _lock: MutexGuard<'static, ()>,
}

pub(crate) fn lock_process_env() -> ProcessEnvGuard {
    let lock = PROCESS_ENV.lock().unwrap_or_else(|e| e.into_inner());
    ProcessEnvGuard {
        home: env::var_os("HOME"),
        prompt: env::var_os("MY_PROMPT"),
        cwd: env::current_dir().ok(),
        _lock: lock,
    }
}

fn restore_var(name: &str, value: &Option<OsString>) {
    match value {
        Some(v) => env::set_var(name, v),
        None => env::remove_var(name),
    }
}

impl Drop for ProcessEnvGuard {
    fn drop(&mut self) {
        restore_var("HOME", &self.home);
        restore_var("MY_PROMPT", &self.prompt);
        if let Some(cwd) = &self.cwd {
            let _ = env::set_current_dir(cwd);
        }
    }
}
