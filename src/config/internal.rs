//! Internal implementation for config module
//!
//! Handles ~/.goscaffold/config.toml - optional user defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// =============================================================================
// Config Types
// =============================================================================

/// User configuration stored in ~/.goscaffold/config.toml
/// All sections are optional; a missing file is an empty config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub toolchain: ToolchainSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Hosting provider segment, e.g. "gitlab.com"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Base path used when neither --gopath nor GOPATH is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gopath: Option<String>,
    /// Username used instead of git user.name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainSection {
    /// Go executable (name or path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go: Option<String>,
}

// =============================================================================
// Load
// =============================================================================

pub fn load(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no user config, using defaults");
        return Ok(UserConfig::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read user config: {}", path.display()))?;

    let mut config: UserConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse user config: {}", path.display()))?;

    if let Some(gopath) = config.defaults.gopath.take() {
        let expanded = shellexpand::full(&gopath)
            .with_context(|| format!("Failed to expand gopath '{gopath}' in {}", path.display()))?;
        config.defaults.gopath = Some(expanded.into_owned());
    }

    if let Some(go) = config.toolchain.go.take() {
        config.toolchain.go = Some(shellexpand::tilde(&go).into_owned());
    }

    tracing::debug!(path = %path.display(), ?config, "loaded user config");
    Ok(config)
}
