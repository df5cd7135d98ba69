//! Go toolchain integration
//!
//! Runs `go mod init` as a blocking child process in the project directory.
//! The executable is resolved through `PATH` when the step runs, not up
//! front, so a missing toolchain fails at the module step like any other
//! subprocess error. A relative program path is resolved against the
//! directory given to [`GoToolchain::relative_to`], since the pipeline has
//! changed the working directory by then.

use crate::error::{Result, ScaffoldError};
use crate::scaffold::Toolchain;
use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Default executable name
pub const GO_PROGRAM: &str = "go";

/// [`Toolchain`] that shells out to a `go` executable
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: String,
    base_dir: Option<PathBuf>,
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new(GO_PROGRAM)
    }
}

impl GoToolchain {
    /// `program` is a bare name looked up on `PATH`, or a path to an executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            base_dir: None,
        }
    }

    /// Resolve relative program paths (and relative `PATH` entries) against `dir`
    pub fn relative_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Resolve the executable the same way a shell would
    pub fn locate(&self) -> Result<PathBuf> {
        let found = match &self.base_dir {
            Some(dir) => which::which_in(&self.program, env::var_os("PATH"), dir),
            None => which::which(&self.program),
        };
        found.map_err(|_| ScaffoldError::ToolchainNotFound {
            program: self.program.clone(),
        })
    }
}

impl Toolchain for GoToolchain {
    fn module_init(&self, dir: &Path, module: Option<&str>) -> Result<String> {
        let program = self.locate()?;

        let mut cmd = Command::new(&program);
        cmd.current_dir(dir).args(["mod", "init"]);
        if let Some(module) = module {
            cmd.arg(module);
        }

        tracing::debug!(program = %program.display(), dir = %dir.display(), ?module, "running go mod init");

        let (status, output) =
            combined_output(cmd).map_err(|source| ScaffoldError::ToolchainSpawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ScaffoldError::ModuleInit { status, output });
        }

        Ok(output)
    }
}

/// Run to completion with stdout and stderr sharing one pipe, so the text
/// keeps the order the child wrote it in. Lossily decoded.
fn combined_output(mut cmd: Command) -> io::Result<(ExitStatus, String)> {
    let (mut reader, writer) = io::pipe()?;
    cmd.stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    let mut child = cmd.spawn()?;
    // The command still owns both write ends; the read below only ends once
    // every copy is closed.
    drop(cmd);

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let status = child.wait()?;

    Ok((status, String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let toolchain = GoToolchain::new("goscaffold-no-such-toolchain");
        let err = toolchain.locate().unwrap_err();
        assert!(matches!(err, ScaffoldError::ToolchainNotFound { .. }));
    }

    #[test]
    fn test_missing_program_fails_module_init() {
        let temp = tempfile::TempDir::new().unwrap();
        let toolchain = GoToolchain::new("goscaffold-no-such-toolchain");
        let err = toolchain.module_init(temp.path(), None).unwrap_err();
        assert!(err.to_string().contains("goscaffold-no-such-toolchain"));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_go(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("fake-go");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_module_init_runs_in_dir() {
            let bin = TempDir::new().unwrap();
            let project = TempDir::new().unwrap();
            let go = fake_go(
                bin.path(),
                r#"echo "args: $*"; echo "to stderr" >&2; pwd > where.txt"#,
            );

            let toolchain = GoToolchain::new(go.to_string_lossy());
            let output = toolchain.module_init(project.path(), None).unwrap();

            assert!(output.contains("args: mod init"));
            assert!(output.contains("to stderr"));
            assert!(project.path().join("where.txt").exists());
        }

        #[test]
        fn test_module_init_passes_explicit_module() {
            let bin = TempDir::new().unwrap();
            let project = TempDir::new().unwrap();
            let go = fake_go(bin.path(), r#"echo "args: $*""#);

            let toolchain = GoToolchain::new(go.to_string_lossy());
            let output = toolchain
                .module_init(project.path(), Some("github.com/ada/demo"))
                .unwrap();

            assert_eq!(output.trim(), "args: mod init github.com/ada/demo");
        }

        #[test]
        fn test_module_init_output_keeps_write_order() {
            let bin = TempDir::new().unwrap();
            let project = TempDir::new().unwrap();
            let go = fake_go(bin.path(), "echo one; echo two >&2; echo three");

            let toolchain = GoToolchain::new(go.to_string_lossy());
            let output = toolchain.module_init(project.path(), None).unwrap();

            assert_eq!(output, "one\ntwo\nthree\n");
        }

        #[test]
        fn test_relative_program_resolves_against_base_dir() {
            let base = TempDir::new().unwrap();
            let project = TempDir::new().unwrap();
            fs::create_dir_all(base.path().join("bin")).unwrap();
            fake_go(&base.path().join("bin"), r#"echo "relative go""#);

            let toolchain = GoToolchain::new("./bin/fake-go").relative_to(base.path());
            let output = toolchain.module_init(project.path(), None).unwrap();

            assert_eq!(output.trim(), "relative go");
        }

        #[test]
        fn test_module_init_failure_keeps_output() {
            let bin = TempDir::new().unwrap();
            let project = TempDir::new().unwrap();
            let go = fake_go(
                bin.path(),
                "echo 'go: cannot determine module path' >&2; exit 1",
            );

            let toolchain = GoToolchain::new(go.to_string_lossy());
            match toolchain.module_init(project.path(), None) {
                Err(ScaffoldError::ModuleInit { status, output }) => {
                    assert_eq!(status.code(), Some(1));
                    assert_eq!(output, "go: cannot determine module path\n");
                }
                other => panic!("expected ModuleInit error, got {other:?}"),
            }
        }
    }
}
