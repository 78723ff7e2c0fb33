use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
pub mod config;
pub mod installer;
pub mod utils;

use crate::config::AppContext;
use crate::installer::InstallError;
use crate::utils::log::{LogLevel, emit, t};

/// CLI to initialize Antigravity Kit in your project
#[derive(Debug, Parser)]
#[command(name = "ag-kit", author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  /// Initialize .agent folder in the current directory
  Init {
    /// Overwrite existing .agent folder
    #[arg(short, long)]
    force: bool,
  },
  /// Check Antigravity Kit status
  Status,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  let cli = parse();
  let ctx = AppContext::from_process()?;
  dispatch(&ctx, cli)
}

/// Print a fatal error with its cause chain, plus the hint when the error
/// carries one. Everything goes to stderr.
pub fn report(err: &anyhow::Error) {
  log_error!("Error: {:#}", err);
  if let Some(hint) = hint_for(err) {
    emit(LogLevel::Error, &t::warn(hint));
  }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
  err.downcast_ref::<InstallError>().and_then(InstallError::hint)
}

fn dispatch(ctx: &AppContext, cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Init { force } => commands::init::run(ctx, force),
    Commands::Status => {
      commands::status::run(ctx);
      Ok(())
    }
  }
}
