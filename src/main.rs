use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use goscaffold::cli::{self, Cli};
use goscaffold::config;
use goscaffold::error::{ScaffoldError, EXIT_FAILURE};
use goscaffold::git::Git;
use goscaffold::logging;
use goscaffold::toolchain::GoToolchain;
use goscaffold::{Environment, Scaffold, ScaffoldPlan, ScaffoldReport, Settings};

fn main() -> ExitCode {
    let args = cli::normalize_go_flags(std::env::args_os());
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return cli::exit_on_parse_error(err),
    };

    logging::init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let environment = Environment::detect();
    let user_config = config::load(&environment.config_path())?;

    let git = Git;
    let settings = Settings::resolve(
        &cli.project_name,
        cli.overrides(),
        &environment,
        &user_config,
        &git,
    )?;
    tracing::debug!(?settings, "resolved settings");

    let start_dir = std::env::current_dir().context("Failed to read current directory")?;
    let toolchain = GoToolchain::new(settings.go_program.clone()).relative_to(start_dir);
    let plan = ScaffoldPlan::from_settings(&settings);
    let report = Scaffold::new(&git, &toolchain).run(&plan)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ScaffoldError>() {
        Some(err) => {
            tracing::debug!(category = ?err.category(), "scaffold failed");
            err.exit_code()
        }
        None => EXIT_FAILURE,
    }
}

fn print_report(report: &ScaffoldReport) {
    for artifact in &report.created {
        println!("  {} Created {}", "✓".green(), artifact.label());
    }
    println!();
    println!(
        "Successfully created and set up Go project at {}",
        report.project_path.display()
    );
    println!("{}", report.summary());
}
