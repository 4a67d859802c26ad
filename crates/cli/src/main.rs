mod cli;
mod cmd;
mod output;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rod_lib::build::BuildError;
use rod_lib::script::ScriptError;
use rod_lib::{Config, ExitCode, ProcessError, SystemRunner};

use crate::cli::Cli;
use crate::cmd::{Context, dispatch};
use crate::output::print_error;

/// Exit code for a program that could not be found, as a shell reports it.
const EXIT_TOOL_MISSING: ExitCode = 127;

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let code = match run(cli) {
    Ok(code) => code,
    Err(err) => report(&err),
  };
  std::process::exit(code);
}

fn run(cli: Cli) -> Result<ExitCode> {
  let mut config = match &cli.config {
    Some(path) => Config::load_from(path)?,
    None => Config::load()?,
  };
  if cli.quiet {
    config.echo_commands = false;
  }
  if cli.keep_going {
    config.keep_going = true;
  }

  let work_dir = std::env::current_dir().context("Failed to determine the current directory")?;
  let ctx = Context {
    runner: SystemRunner::in_dir(&work_dir),
    config,
    work_dir,
  };
  dispatch(&ctx, cli.command)
}

fn report(err: &anyhow::Error) -> ExitCode {
  if let Some(program) = missing_program(err) {
    print_error(&format!("{} not found; is it installed and on PATH?", program));
    return EXIT_TOOL_MISSING;
  }
  print_error(&format!("{:#}", err));
  1
}

/// The program name when `err` is a failed lookup of an external tool.
fn missing_program(err: &anyhow::Error) -> Option<&str> {
  let process = err
    .downcast_ref::<ProcessError>()
    .or_else(|| match err.downcast_ref::<BuildError>()? {
      BuildError::Process(e) => Some(e),
      _ => None,
    })
    .or_else(|| match err.downcast_ref::<ScriptError>()? {
      ScriptError::Process(e) | ScriptError::Build(BuildError::Process(e)) => Some(e),
      _ => None,
    })?;

  match process {
    ProcessError::NotFound { program } => Some(program.as_str()),
    _ => None,
  }
}
