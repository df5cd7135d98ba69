use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Environment variable holding the base path default
pub const GOPATH_VAR: &str = "GOPATH";

/// Environment variable pointing at an alternative config file
pub const CONFIG_VAR: &str = "GOSCAFFOLD_CONFIG";

/// Snapshot of the process environment goscaffold depends on.
///
/// Captured once at startup and passed down explicitly, so nothing below
/// `main` reads ambient state. Values are kept as OS strings; a non-UTF-8
/// variable anywhere in the environment is not an error.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub gopath: Option<PathBuf>,
    pub config_override: Option<PathBuf>,
}

impl Environment {
    pub fn detect() -> Self {
        Self::from_vars(env::vars_os())
    }

    /// Build a snapshot from explicit key/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: Into<OsString>,
    {
        let mut environment = Environment::default();

        for (key, value) in vars {
            let key = key.as_ref();
            if key == GOPATH_VAR {
                environment.gopath = Some(PathBuf::from(value.into()));
            } else if key == CONFIG_VAR {
                let value = value.into();
                if !value.is_empty() {
                    environment.config_override = Some(PathBuf::from(value));
                }
            }
        }

        environment
    }

    /// Config file to load: the override if set, else `~/.goscaffold/config.toml`
    pub fn config_path(&self) -> PathBuf {
        self.config_override
            .clone()
            .unwrap_or_else(crate::paths::config_path)
    }
}
