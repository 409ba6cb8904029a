use std::path::PathBuf;

const RC_FILE: &str = ".conchrc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// Set when the rc path came from the command line.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new(rc_override: Option<PathBuf>) -> Self {
        match rc_override {
            Some(path) => ConfigPaths {
                rc_path: Some(path),
                explicit: true,
            },
            None => ConfigPaths {
                rc_path: dirs::home_dir().map(|home| home.join(RC_FILE)),
                explicit: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_process_env;
    use std::env;

    #[test]
    fn test_default_rc_path() {
        let _guard = lock_process_env();
        env::set_var("HOME", "/home/testuser");

        let paths = ConfigPaths::new(None);
        assert_eq!(paths.rc_path, Some(PathBuf::from("/home/testuser/.conchrc")));
        assert!(!paths.explicit);
    }

    #[test]
    fn test_override_rc_path() {
        let paths = ConfigPaths::new(Some(PathBuf::from("/etc/conchrc")));
        assert_eq!(paths.rc_path, Some(PathBuf::from("/etc/conchrc")));
        assert!(paths.explicit);
    }
}
