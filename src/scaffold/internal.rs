//! Internal implementation for the scaffold pipeline

use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::paths;

use super::template::render_main_go;
use super::{Artifact, ScaffoldPlan, ScaffoldReport, Toolchain, Vcs};

/// Main execution logic for the pipeline
pub fn run(vcs: &dyn Vcs, toolchain: &dyn Toolchain, plan: &ScaffoldPlan) -> Result<ScaffoldReport> {
    // Every step after the chdir must see the same directory.
    let project_path = absolute_project_path(&plan.project_path)?;
    let path = project_path.as_path();
    let mut created = Vec::with_capacity(4);

    tracing::debug!(project = %plan.project_name, path = %path.display(), "scaffolding");

    create_project_dir(path)?;
    created.push(Artifact::Directory);

    if plan.change_dir {
        change_dir(path)?;
    }

    vcs.init(path)?;
    tracing::info!(path = %paths::git_dir(path).display(), "initialized git repository");
    created.push(Artifact::GitRepository);

    let toolchain_output = toolchain.module_init(path, plan.module.as_deref())?;
    tracing::info!(
        path = %paths::module_file(path).display(),
        output = %toolchain_output.trim(),
        "initialized go module"
    );
    created.push(Artifact::GoModule);

    let entry_file = write_entry_point(path, &plan.project_name)?;
    tracing::info!(file = %entry_file.display(), "wrote entry point");
    created.push(Artifact::EntryPoint);

    Ok(ScaffoldReport {
        project_name: plan.project_name.clone(),
        project_path,
        entry_file,
        module: plan.module.clone(),
        created,
        toolchain_output,
    })
}

/// Anchor a relative project path at the current working directory
fn absolute_project_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|source| ScaffoldError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}

/// `mkdir -p` with 0755 on Unix
fn create_project_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        tracing::warn!(path = %path.display(), "project directory already exists");
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(path)
        .map_err(|source| ScaffoldError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), "created project directory");
    Ok(())
}

fn change_dir(path: &Path) -> Result<()> {
    std::env::set_current_dir(path).map_err(|source| ScaffoldError::ChangeDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "changed working directory");
    Ok(())
}

/// Write `main.go` with 0644 on Unix, replacing any existing file
fn write_entry_point(root: &Path, project_name: &str) -> Result<PathBuf> {
    let path = paths::entry_file(root);
    let contents = render_main_go(project_name);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let to_err = |source| ScaffoldError::WriteEntryPoint {
        path: path.clone(),
        source,
    };

    let mut file = options.open(&path).map_err(to_err)?;
    file.write_all(contents.as_bytes()).map_err(to_err)?;

    Ok(path)
}
