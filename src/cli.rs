//! Command-line surface
//!
//! Flags follow the Go `flag` conventions users of this kind of tool expect:
//! `-provider x`, `-gopath=x` and `--provider x` are all accepted.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::process::ExitCode;

use crate::error::EXIT_FAILURE;
use crate::settings::Overrides;

const LONG_ABOUT: &str = "\
Creates a new Go project directory structure, initializes a Git repository, \
sets up a Go module, and generates a basic main.go file.

The project is created at $GOPATH/src/<provider>/<username>/<project-name>. \
GOPATH and the git global config supply the defaults; the options below \
override them. Defaults can also be set in ~/.goscaffold/config.toml.";

#[derive(Parser, Debug)]
#[command(
    name = "goscaffold",
    version,
    about = "Go project initializer",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Name of the project to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Git provider (e.g., github.com, gitlab.com) [default: github.com]
    #[arg(long, value_name = "HOST")]
    pub provider: Option<String>,

    /// GOPATH to use [default: $GOPATH]
    #[arg(long, value_name = "DIR")]
    pub gopath: Option<String>,

    /// Git username (defaults to global git config)
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Module path for `go mod init` (defaults to the one go infers)
    #[arg(long, value_name = "PATH")]
    pub module: Option<String>,

    /// Go executable to run
    #[arg(long, value_name = "PROGRAM")]
    pub go: Option<String>,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            provider: self.provider.clone(),
            gopath: self.gopath.clone(),
            username: self.username.clone(),
            module: self.module.clone(),
            go: self.go.clone(),
        }
    }
}

/// Long options that may also be spelled with a single dash
const LONG_FLAGS: &[&str] = &[
    "provider", "gopath", "username", "module", "go", "json", "verbose", "help", "version",
];

/// Rewrite Go-style `-name` / `-name=value` into `--name` / `--name=value`.
///
/// The first item (program name) and everything after `--` pass through.
pub fn normalize_go_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(text) => go_style_flag(text).map(OsString::from),
            None => None,
        };
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

fn go_style_flag(text: &str) -> Option<String> {
    let body = text.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    LONG_FLAGS.contains(&name).then(|| format!("-{text}"))
}

/// Exit code for a parse failure: 0 for help/version, 1 otherwise
pub fn parse_error_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_FAILURE,
    }
}

/// Report a parse failure and exit.
///
/// Help and version go to stdout; anything else prints the error and the
/// full usage to stderr.
pub fn exit_on_parse_error(err: clap::Error) -> ExitCode {
    let code = parse_error_code(&err);
    let _ = err.print();
    if code != 0 {
        eprintln!("\n{}", Cli::command().render_long_help());
    }
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_go_flags(os(args)))
    }

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_single_dash() {
        let out = normalize_go_flags(os(&[
            "goscaffold",
            "-provider",
            "gitlab.com",
            "-gopath=/tmp/go",
            "--username",
            "ada",
            "-v",
            "demo",
        ]));
        assert_eq!(
            out,
            os(&[
                "goscaffold",
                "--provider",
                "gitlab.com",
                "--gopath=/tmp/go",
                "--username",
                "ada",
                "-v",
                "demo",
            ])
        );
    }

    #[test]
    fn test_normalize_leaves_unknown_and_passthrough() {
        let out = normalize_go_flags(os(&["goscaffold", "-x", "--", "-provider"]));
        assert_eq!(out, os(&["goscaffold", "-x", "--", "-provider"]));
    }

    #[test]
    fn test_parse_go_style() {
        let cli = parse(&["goscaffold", "-provider", "gitlab.com", "-username=grace", "demo"]).unwrap();
        assert_eq!(cli.project_name, "demo");
        assert_eq!(cli.provider.as_deref(), Some("gitlab.com"));
        assert_eq!(cli.username.as_deref(), Some("grace"));
        assert!(cli.gopath.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&["goscaffold", "--module", "example.com/x", "--go", "go1.22", "x"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.module.as_deref(), Some("example.com/x"));
        assert_eq!(overrides.go.as_deref(), Some("go1.22"));
        assert!(overrides.provider.is_none());
    }

    #[test]
    fn test_requires_exactly_one_project() {
        let missing = parse(&["goscaffold"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        let extra = parse(&["goscaffold", "one", "two"]).unwrap_err();
        assert_eq!(extra.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_forms() {
        for flag in ["-h", "--help", "-help"] {
            let err = parse(&["goscaffold", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "flag {flag}");
        }
    }

    #[test]
    fn test_exit_codes() {
        let help = parse(&["goscaffold", "-h"]).unwrap_err();
        assert_eq!(parse_error_code(&help), 0);

        let version = parse(&["goscaffold", "-version"]).unwrap_err();
        assert_eq!(parse_error_code(&version), 0);

        let usage = parse(&["goscaffold"]).unwrap_err();
        assert_eq!(parse_error_code(&usage), EXIT_FAILURE);

        let unknown = parse(&["goscaffold", "--bogus", "demo"]).unwrap_err();
        assert_eq!(parse_error_code(&unknown), EXIT_FAILURE);
    }
}
