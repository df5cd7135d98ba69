//! Git repository management for goscaffold
//!
//! Handles:
//! - Global identity lookup (`user.name`)
//! - Plain (non-bare) repository initialization
//!
//! Everything goes through libgit2; no `git` executable is required.

mod operations;

pub use operations::{global_config, identity_name, init_repository, is_git_repo};

use crate::error::Result;
use crate::scaffold::Vcs;
use std::path::Path;

/// [`Vcs`] backed by libgit2 and the user's global git config
#[derive(Debug, Default, Clone, Copy)]
pub struct Git;

impl Vcs for Git {
    fn identity_name(&self) -> Result<String> {
        let config = global_config()?;
        identity_name(&config)
    }

    fn init(&self, path: &Path) -> Result<()> {
        init_repository(path)?;
        Ok(())
    }
}
