use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// rod - Nim command-line helper: build, run, shrink and scaffold
#[derive(Parser, Debug)]
#[command(name = "rod")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
#[command(after_help = "Run 'rod' without arguments for the option table.")]
pub struct Cli {
  /// Enable verbose logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Do not echo commands before running them
  #[arg(short, long)]
  pub quiet: bool,

  /// Keep running strip/pack steps after a failed step
  #[arg(long)]
  pub keep_going: bool,

  /// Configuration file (default: $XDG_CONFIG_HOME/rod/config.json)
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Option<Commands>,
}

/// The source file a build verb works on.
///
/// Optional at the parser level so that a missing file is reported as a
/// usage error with exit code 1 rather than a parse failure.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArg {
  /// Nim source file
  pub source: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
  /// Nim source file
  pub source: Option<PathBuf>,

  /// Arguments passed on to the program
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a project folder (alap + pykot + nimble)
  Init,

  /// Create a skeleton alap.nim
  Alap,

  /// Copy the helper library to the current directory
  Pykot,

  /// Create a simple alap.nimble
  Nimble,

  /// Edit the .nimble file to add a dependency
  Ad,

  /// Install dependencies (and nothing else)
  Id,

  /// Compile (debug)
  #[command(name = "c")]
  Compile(SourceArg),

  /// Compile (release)
  #[command(name = "rel")]
  Release(SourceArg),

  /// Small executable: release build optimized for size
  #[command(name = "small1")]
  Small1(SourceArg),

  /// Smaller executable: small1 + strip
  #[command(name = "small2")]
  Small2(SourceArg),

  /// Smallest executable: small2 + upx
  #[command(name = "small3")]
  Small3(SourceArg),

  /// Compile and run
  ///
  /// Everything after the source file goes to the program, `-h` included.
  #[command(name = "cr", disable_help_flag = true)]
  CompileRun(RunArgs),

  /// Compile, run, then delete the executable (run it like a script)
  #[command(name = "s", disable_help_flag = true)]
  Script(RunArgs),

  /// Print the compiler's version
  #[command(name = "ver")]
  Version {
    /// Also write the version line to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
  },
}
