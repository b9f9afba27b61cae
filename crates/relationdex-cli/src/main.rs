mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{check, completions, contacts, interactions, Context};
use crate::error::{exit_code_for, report_error};
use relationdex_config as config;

#[derive(Debug, Parser)]
#[command(name = "relationdex", version, about = "relationdex CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Build a new contact record
    New(contacts::NewArgs),
    /// Validate a contact record and summarize it
    Check(check::CheckArgs),
    /// Record a talk or an in-person meeting
    Log(interactions::LogArgs),
    /// Edit name, notes or desired frequencies
    Edit(contacts::EditArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config =
                config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::New(args) => contacts::new_contact(&ctx, args),
                Command::Check(args) => check::check_contact(&ctx, args),
                Command::Log(args) => interactions::log_interaction(&ctx, args),
                Command::Edit(args) => contacts::edit_contact(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
