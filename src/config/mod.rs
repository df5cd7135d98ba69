//! Config module - optional user defaults
//!
//! Reads `~/.goscaffold/config.toml` (or the file named by
//! `GOSCAFFOLD_CONFIG`). Values here sit below command-line flags and the
//! `GOPATH` environment variable, and above the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use goscaffold::config;
//! use goscaffold::environment::Environment;
//!
//! let env = Environment::detect();
//! let user = config::load(&env.config_path())?;
//! if let Some(provider) = &user.defaults.provider {
//!     println!("Default provider: {provider}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::Path;

pub use internal::{DefaultsSection, ToolchainSection, UserConfig};

/// Load user config from `path`
///
/// Returns an empty config if the file doesn't exist. `gopath` has `~` and
/// environment variables expanded; `toolchain.go` has `~` expanded.
pub fn load(path: &Path) -> Result<UserConfig> {
    internal::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_config() -> Result<()> {
        let temp = TempDir::new()?;
        let config = load(&temp.path().join("absent.toml"))?;
        assert_eq!(config, UserConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_sections() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[defaults]
provider = "gitlab.com"
gopath = "/srv/go"
username = "grace"

[toolchain]
go = "/usr/local/go/bin/go"
"#,
        )?;

        let config = load(&path)?;
        assert_eq!(config.defaults.provider.as_deref(), Some("gitlab.com"));
        assert_eq!(config.defaults.gopath.as_deref(), Some("/srv/go"));
        assert_eq!(config.defaults.username.as_deref(), Some("grace"));
        assert_eq!(config.toolchain.go.as_deref(), Some("/usr/local/go/bin/go"));
        Ok(())
    }

    #[test]
    fn test_partial_config() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults]\nprovider = \"codeberg.org\"\n")?;

        let config = load(&path)?;
        assert_eq!(config.defaults.provider.as_deref(), Some("codeberg.org"));
        assert!(config.defaults.gopath.is_none());
        assert!(config.toolchain.go.is_none());
        Ok(())
    }

    #[test]
    fn test_tilde_expansion() -> Result<()> {
        let Some(home) = dirs::home_dir() else {
            return Ok(());
        };
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults]\ngopath = \"~/go\"\n")?;

        let config = load(&path)?;
        let expected = home.join("go");
        assert_eq!(
            config.defaults.gopath.as_deref(),
            Some(expected.to_string_lossy().as_ref())
        );
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_error() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults\nprovider = ")?;

        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse user config"));
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_error() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults]\nprovder = \"typo.com\"\n")?;

        assert!(load(&path).is_err());
        Ok(())
    }
}
