//! Resolve run settings from flags, environment, user config and git identity
//!
//! Precedence, highest first:
//!
//! | Setting  | Sources                                            |
//! |----------|----------------------------------------------------|
//! | provider | `--provider`, config `defaults.provider`, `github.com` |
//! | gopath   | `--gopath`, `$GOPATH`, config `defaults.gopath`    |
//! | username | `--username`, config `defaults.username`, git `user.name` |
//! | go       | `--go`, config `toolchain.go`, `go`                |
//!
//! An explicitly empty `--gopath` is not replaced by a lower source; it is
//! rejected. An empty `--username` means "look it up".

use serde::Serialize;
use std::path::PathBuf;

use crate::config::UserConfig;
use crate::environment::Environment;
use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::scaffold::Vcs;
use crate::toolchain::GO_PROGRAM;

/// Values given on the command line; `None` when the flag was absent
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub provider: Option<String>,
    pub gopath: Option<String>,
    pub username: Option<String>,
    pub module: Option<String>,
    pub go: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub project_name: String,
    pub provider: String,
    pub base_path: PathBuf,
    pub username: String,
    pub module: Option<String>,
    pub go_program: String,
}

impl Settings {
    /// Validation order: project name, base path, then username. The
    /// identity lookup only happens once everything else is known to be
    /// usable, and nothing here touches the filesystem.
    pub fn resolve(
        project_name: &str,
        overrides: Overrides,
        environment: &Environment,
        config: &UserConfig,
        vcs: &dyn Vcs,
    ) -> Result<Self> {
        if project_name.is_empty() {
            return Err(ScaffoldError::EmptyProjectName);
        }

        let defaults = &config.defaults;

        let base_path = overrides
            .gopath
            .map(PathBuf::from)
            .or_else(|| environment.gopath.clone())
            .or_else(|| defaults.gopath.clone().map(PathBuf::from))
            .unwrap_or_default();
        if base_path.as_os_str().is_empty() {
            return Err(ScaffoldError::MissingBasePath);
        }

        let provider = overrides
            .provider
            .or_else(|| defaults.provider.clone())
            .unwrap_or_else(|| paths::DEFAULT_PROVIDER.to_string());

        let username = match non_empty(overrides.username)
            .or_else(|| non_empty(defaults.username.clone()))
        {
            Some(name) => name,
            None => {
                let name = vcs.identity_name()?;
                tracing::debug!(%name, "username from git config");
                name
            }
        };

        let go_program = overrides
            .go
            .or_else(|| config.toolchain.go.clone())
            .unwrap_or_else(|| GO_PROGRAM.to_string());

        Ok(Self {
            project_name: project_name.to_string(),
            provider,
            base_path,
            username,
            module: non_empty(overrides.module),
            go_program,
        })
    }

    pub fn project_path(&self) -> PathBuf {
        paths::project_path(
            &self.base_path,
            &self.provider,
            &self.username,
            &self.project_name,
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
