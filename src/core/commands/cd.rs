use std::env;
use std::path::PathBuf;

use tracing::debug;

use super::{Builtin, BuiltinError, Context};
use crate::core::terminal::TerminalControl;
use crate::path::PathExpander;

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }

    /// Change the working directory to `dir`, or to `HOME` when `dir` is
    /// absent or empty. Returns the directory that was entered.
    pub fn change_dir(&self, dir: Option<&str>) -> Result<PathBuf, BuiltinError> {
        let target = match dir.filter(|d| !d.is_empty()) {
            Some(dir) => self.path_expander.expand(dir),
            None => self.path_expander.home_dir(),
        }
        .ok_or(BuiltinError::MissingHomeDirectory)?;

        env::set_current_dir(&target).map_err(|source| BuiltinError::DirectoryChangeFailed {
            path: target.clone(),
            source,
        })?;

        debug!(dir = %target.display(), "changed directory");
        Ok(target)
    }
}

impl Builtin for CdCommand {
    fn execute<T: TerminalControl>(
        &self,
        _ctx: &mut Context<'_, T>,
        args: &[String],
    ) -> Result<(), BuiltinError> {
        let dir = args.first().ok_or(BuiltinError::MissingArgument)?;
        self.change_dir(Some(dir)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Harness;
    use crate::core::commands::DispatchResult;
    use crate::test_support::lock_process_env;

    #[test]
    fn test_cd_without_argument_keeps_directory() {
        let _guard = lock_process_env();
        let before = env::current_dir().unwrap();

        let mut harness = Harness::new();
        assert_eq!(harness.dispatch(&["cd"]), DispatchResult::Handled(false));
        assert_eq!(env::current_dir().unwrap(), before);
        assert!(harness.stderr().contains("missing argument"));
    }

    #[test]
    fn test_cd_to_directory() {
        let _guard = lock_process_env();
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().canonicalize().unwrap();

        let mut harness = Harness::new();
        let result = harness.dispatch(&["cd", target.to_str().unwrap()]);
        assert_eq!(result, DispatchResult::Handled(true));
        assert_eq!(env::current_dir().unwrap(), target);
        assert!(harness.stderr().is_empty());
    }

    #[test]
    fn test_cd_nonexistent_keeps_directory() {
        let _guard = lock_process_env();
        let before = env::current_dir().unwrap();

        let mut harness = Harness::new();
        let result = harness.dispatch(&["cd", "/nonexistent-xyz"]);
        assert_eq!(result, DispatchResult::Handled(false));
        assert_eq!(env::current_dir().unwrap(), before);
        assert!(harness.stderr().starts_with("cd: /nonexistent-xyz: "));
    }

    #[test]
    fn test_cd_into_file_fails() {
        let _guard = lock_process_env();
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = CdCommand::new()
            .change_dir(file.path().to_str())
            .unwrap_err();
        assert!(matches!(err, BuiltinError::DirectoryChangeFailed { .. }));
    }

    #[test]
    fn test_change_dir_defaults_to_home() {
        let _guard = lock_process_env();
        let temp = tempfile::tempdir().unwrap();
        let home = temp.path().canonicalize().unwrap();
        env::set_var("HOME", &home);

        let cmd = CdCommand::new();
        assert_eq!(cmd.change_dir(None).unwrap(), home);
        assert_eq!(env::current_dir().unwrap(), home);

        env::set_current_dir("/").unwrap();
        assert_eq!(cmd.change_dir(Some("")).unwrap(), home);
    }

    #[test]
    fn test_change_dir_without_home() {
        let _guard = lock_process_env();
        env::remove_var("HOME");
        let before = env::current_dir().unwrap();

        let cmd = CdCommand::new();
        assert!(matches!(
            cmd.change_dir(None),
            Err(BuiltinError::MissingHomeDirectory)
        ));
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_cd_tilde_without_home_is_reported() {
        let _guard = lock_process_env();
        env::remove_var("HOME");
        let before = env::current_dir().unwrap();

        let mut harness = Harness::new();
        assert_eq!(harness.dispatch(&["cd", "~"]), DispatchResult::Handled(false));
        assert_eq!(harness.stderr(), "cd: unable to get home directory\n");
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_cd_tilde_subdirectory() {
        let _guard = lock_process_env();
        let temp = tempfile::tempdir().unwrap();
        let home = temp.path().canonicalize().unwrap();
        std::fs::create_dir(home.join("projects")).unwrap();
        env::set_var("HOME", &home);

        let mut harness = Harness::new();
        assert_eq!(
            harness.dispatch(&["cd", "~/projects"]),
            DispatchResult::Handled(true)
        );
        assert_eq!(env::current_dir().unwrap(), home.join("projects"));
    }
}
