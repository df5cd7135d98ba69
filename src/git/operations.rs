//! Low-level git operations

use crate::error::{Result, ScaffoldError};
use git2::{Config, ConfigLevel, ErrorCode, Repository};
use std::path::Path;

/// Open the user's global git configuration (XDG `git/config` and `~/.gitconfig`)
///
/// System and repository levels are ignored. Missing files are skipped, so a
/// user with no global config gets an empty configuration.
pub fn global_config() -> Result<Config> {
    let mut config = Config::new().map_err(ScaffoldError::IdentityConfig)?;

    if let Ok(path) = Config::find_xdg() {
        config
            .add_file(&path, ConfigLevel::XDG, false)
            .map_err(ScaffoldError::IdentityConfig)?;
    }
    if let Ok(path) = Config::find_global() {
        config
            .add_file(&path, ConfigLevel::Global, false)
            .map_err(ScaffoldError::IdentityConfig)?;
    }

    Ok(config)
}

/// Read `user.name` from a git configuration
///
/// An unset or blank name is [`ScaffoldError::MissingIdentity`].
pub fn identity_name(config: &Config) -> Result<String> {
    match config.get_string("user.name") {
        Ok(name) if !name.trim().is_empty() => Ok(name),
        Ok(_) => Err(ScaffoldError::MissingIdentity),
        Err(e) if e.code() == ErrorCode::NotFound => Err(ScaffoldError::MissingIdentity),
        Err(e) => Err(ScaffoldError::IdentityConfig(e)),
    }
}

/// Initialize a non-bare repository at `path`
///
/// Re-initializing an existing repository is harmless and succeeds.
pub fn init_repository(path: &Path) -> Result<Repository> {
    Repository::init(path).map_err(|source| ScaffoldError::VcsInit {
        path: path.to_path_buf(),
        source,
    })
}

/// Check if `path` is the working directory of a git repository
pub fn is_git_repo(path: &Path) -> bool {
    Repository::open(path)
        .map(|repo| !repo.is_bare())
        .unwrap_or(false)
}
