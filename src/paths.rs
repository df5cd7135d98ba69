//! Single source of truth for the filesystem layout goscaffold touches.
//!
//! No I/O here. One file shows every path the tool reads or creates.
//!
//! # User Level (~/.goscaffold/)
//!
//! ```text
//! ~/.goscaffold/
//! └── config.toml              # Optional defaults
//! ```
//!
//! # Project Level
//!
//! ```text
//! $GOPATH/src/<provider>/<username>/<project>/
//! ├── .git/                    # git init
//! ├── go.mod                   # go mod init
//! └── main.go                  # Entry point template
//! ```

use std::path::{Path, PathBuf};

/// Fixed segment between the base path and the provider
pub const SRC_DIR: &str = "src";

/// Entry-point file written at the project root
pub const ENTRY_FILE: &str = "main.go";

/// Module manifest produced by the toolchain
pub const MODULE_FILE: &str = "go.mod";

/// Default hosting provider segment
pub const DEFAULT_PROVIDER: &str = "github.com";

// =============================================================================
// User Level (~/.goscaffold/)
// =============================================================================

/// User's goscaffold home directory: `~/.goscaffold/`
pub fn goscaffold_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".goscaffold")
}

/// Default user config file: `~/.goscaffold/config.toml`
pub fn config_path() -> PathBuf {
    goscaffold_home().join("config.toml")
}

// =============================================================================
// Project Level
// =============================================================================

/// Project root: `{base}/src/{provider}/{username}/{project}`
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use goscaffold::paths;
///
/// let path = paths::project_path(Path::new("/home/ada/go"), "github.com", "ada", "demo");
/// assert_eq!(path, Path::new("/home/ada/go/src/github.com/ada/demo"));
/// ```
pub fn project_path(base: &Path, provider: &str, username: &str, project: &str) -> PathBuf {
    base.join(SRC_DIR)
        .join(provider)
        .join(username)
        .join(project)
}

/// Entry point: `{root}/main.go`
pub fn entry_file(root: &Path) -> PathBuf {
    root.join(ENTRY_FILE)
}

/// Module manifest: `{root}/go.mod`
pub fn module_file(root: &Path) -> PathBuf {
    root.join(MODULE_FILE)
}

/// Repository marker: `{root}/.git`
pub fn git_dir(root: &Path) -> PathBuf {
    root.join(".git")
}
