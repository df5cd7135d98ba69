//! Scaffold a Go project
//!
//! Public interface for the pipeline; the steps live in `internal`.
//!
//! # Process
//!
//! 1. **Directory**: create `$GOPATH/src/<provider>/<user>/<project>` and parents;
//!    a relative path is anchored at the working directory first
//! 2. **Working directory**: chdir into it (process-wide, never restored)
//! 3. **Git**: plain, non-bare `git init`
//! 4. **Module**: `go mod init` in the project directory
//! 5. **Entry point**: write `main.go`
//!
//! Each step is fatal on error. Earlier steps are never undone, so a failed
//! `go mod init` leaves the directory and `.git/` behind.
//!
//! # Example
//!
//! ```no_run
//! use goscaffold::git::Git;
//! use goscaffold::scaffold::{Scaffold, ScaffoldPlan};
//! use goscaffold::toolchain::GoToolchain;
//!
//! let plan = ScaffoldPlan::new("demo", "/home/ada/go/src/github.com/ada/demo");
//! let report = Scaffold::new(&Git, &GoToolchain::default()).run(&plan)?;
//! println!("{}", report.summary());
//! # Ok::<(), goscaffold::error::ScaffoldError>(())
//! ```

mod internal;
pub mod template;

use crate::error::Result;
use crate::settings::Settings;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Version control capability used by the pipeline
pub trait Vcs {
    /// Name from the user's global identity configuration
    fn identity_name(&self) -> Result<String>;

    /// Initialize a non-bare repository at `path`
    fn init(&self, path: &Path) -> Result<()>;
}

/// Build toolchain capability used by the pipeline
pub trait Toolchain {
    /// Create the module manifest in `dir`, returning the combined output.
    ///
    /// `module` of `None` lets the toolchain infer the module path.
    fn module_init(&self, dir: &Path, module: Option<&str>) -> Result<String>;
}

/// Everything the pipeline needs to know, fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub project_name: String,
    pub project_path: PathBuf,
    pub module: Option<String>,
    /// chdir into the project once it exists
    #[serde(skip)]
    pub change_dir: bool,
}

impl ScaffoldPlan {
    pub fn new(project_name: impl Into<String>, project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            project_path: project_path.into(),
            module: None,
            change_dir: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            module: settings.module.clone(),
            ..Self::new(settings.project_name.clone(), settings.project_path())
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Keep the process working directory untouched
    pub fn without_chdir(mut self) -> Self {
        self.change_dir = false;
        self
    }
}

/// Something the pipeline created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    Directory,
    GitRepository,
    GoModule,
    EntryPoint,
}

impl Artifact {
    pub fn label(&self) -> &'static str {
        match self {
            Artifact::Directory => "project directory",
            Artifact::GitRepository => "Git repository",
            Artifact::GoModule => "Go module",
            Artifact::EntryPoint => "main.go file",
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub project_path: PathBuf,
    pub entry_file: PathBuf,
    pub module: Option<String>,
    pub created: Vec<Artifact>,
    pub toolchain_output: String,
}

impl ScaffoldReport {
    /// "Created: Git repository, Go module, and main.go file"
    pub fn summary(&self) -> String {
        let labels: Vec<&str> = self
            .created
            .iter()
            .filter(|a| **a != Artifact::Directory)
            .map(Artifact::label)
            .collect();

        let listed = match labels.as_slice() {
            [] => String::new(),
            [one] => (*one).to_string(),
            [a, b] => format!("{a} and {b}"),
            [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
        };

        format!("Created: {listed}")
    }
}

/// The pipeline, bound to its external collaborators
pub struct Scaffold<'a> {
    vcs: &'a dyn Vcs,
    toolchain: &'a dyn Toolchain,
}

impl<'a> Scaffold<'a> {
    pub fn new(vcs: &'a dyn Vcs, toolchain: &'a dyn Toolchain) -> Self {
        Self { vcs, toolchain }
    }

    /// Run every step in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step. Nothing already created
    /// is removed.
    pub fn run(&self, plan: &ScaffoldPlan) -> Result<ScaffoldReport> {
        internal::run(self.vcs, self.toolchain, plan)
    }
}
