//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DeployOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "deploy-deps")]
#[command(version)]
#[command(
    about = "Run deps/bootstrap.py with fail-fast arguments and report its exit status",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to deploy-deps.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Interpreter used to run the bootstrap script
    #[arg(long, value_name = "PATH")]
    interpreter: Option<PathBuf>,
    /// Exit successfully even when the bootstrap script fails
    #[arg(long)]
    ignore_exit_status: bool,
    /// Print the bootstrap command instead of running it
    #[arg(short = 'n', long)]
    dry_run: bool,
    /// Output format for --dry-run
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "dry_run")]
    format: OutputFormat,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = DeployOptions {
        config_path: cli.config,
        interpreter: cli.interpreter,
        ignore_exit_status: cli.ignore_exit_status,
    };

    let result =
        if cli.dry_run { run_dry(&options, cli.format).map(|_| 0) } else { run_deploy(&options) };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_deploy(options: &DeployOptions) -> Result<i32, AppError> {
    let outcome = api::deploy(options)?;
    Ok(outcome.exit_code())
}

fn run_dry(options: &DeployOptions, format: OutputFormat) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let invocation = api::plan_at(&root, options)?;

    match format {
        OutputFormat::Text => println!("{}", invocation.display_command()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&invocation.plan(&root))?)
        }
    }
    Ok(())
}
