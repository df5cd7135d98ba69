//! Error taxonomy for scaffolding
//!
//! Every failure is terminal: the pipeline stops at the first error and the
//! process exits with [`EXIT_FAILURE`]. Nothing created by earlier steps is
//! rolled back.
//!
//! Messages carry their own context only; causes hang off `source()` and are
//! printed as a chain by the binary.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Exit code for every usage, validation and step failure
pub const EXIT_FAILURE: u8 = 1;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error(
        "GOPATH is not set. Set the GOPATH environment variable or provide it using -gopath (or --gopath)"
    )]
    MissingBasePath,

    #[error("git user.name is not set in global config")]
    MissingIdentity,

    #[error("failed to load git config")]
    IdentityConfig(#[source] git2::Error),

    #[error("failed to resolve project directory {}", path.display())]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create project directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to change to project directory {}", path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize git repository at {}", path.display())]
    VcsInit {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("go toolchain '{program}' not found in PATH")]
    ToolchainNotFound { program: String },

    #[error("failed to run {}", program.display())]
    ToolchainSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize Go module ({status})\n{output}")]
    ModuleInit { status: ExitStatus, output: String },

    #[error("failed to create {}", path.display())]
    WriteEntryPoint {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad classes of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Configuration,
    Filesystem,
    External,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaffoldError::EmptyProjectName => ErrorCategory::Usage,
            ScaffoldError::MissingBasePath
            | ScaffoldError::MissingIdentity
            | ScaffoldError::IdentityConfig(_) => ErrorCategory::Configuration,
            ScaffoldError::ResolvePath { .. }
            | ScaffoldError::CreateDir { .. }
            | ScaffoldError::ChangeDir { .. }
            | ScaffoldError::WriteEntryPoint { .. } => ErrorCategory::Filesystem,
            ScaffoldError::VcsInit { .. }
            | ScaffoldError::ToolchainNotFound { .. }
            | ScaffoldError::ToolchainSpawn { .. }
            | ScaffoldError::ModuleInit { .. } => ErrorCategory::External,
        }
    }

    /// Process exit code for this error. All failures share one code.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
