//! Command lines for the external toolchain.
//!
//! [`Toolchain`] knows how to phrase a request to each collaborator (compiler,
//! stripper, packer, package installer, editor) and hands the resulting command
//! line to a [`ProcessRunner`]. It never interprets exit codes; callers decide
//! what a non-zero status means.
//!
//! Configured program names are quoted as single words, so a path containing
//! spaces or backslashes names one executable. Extra options cannot be smuggled
//! in through a program name.

use std::path::Path;

use tracing::debug;

use crate::build::BuildMode;
use crate::config::Config;
use crate::process::{ExitCode, ProcessError, ProcessRunner, RunOptions, quote};

/// Compiler flags that silence hints and progress output.
pub const QUIET_FLAGS: [&str; 2] = ["--hints:off", "--verbosity:0"];

pub struct Toolchain<'a, R> {
  runner: &'a R,
  config: &'a Config,
}

impl<'a, R: ProcessRunner> Toolchain<'a, R> {
  pub fn new(runner: &'a R, config: &'a Config) -> Self {
    Self { runner, config }
  }

  pub fn runner(&self) -> &'a R {
    self.runner
  }

  pub fn config(&self) -> &'a Config {
    self.config
  }

  /// Options for toolchain steps: echo per config, never a separator.
  pub fn run_options(&self) -> RunOptions {
    RunOptions {
      echo: self.config.echo_commands,
      separator: false,
    }
  }

  /// Build the compiler command line for `source`.
  ///
  /// `nim [--hints:off --verbosity:0] c [-d:release] [--opt:size] <source>`
  pub fn compile_command(&self, source: &Path, mode: BuildMode, quiet: bool) -> String {
    let mut words: Vec<String> = vec![quote(&self.config.compiler)];
    if quiet {
      words.extend(QUIET_FLAGS.iter().map(|f| f.to_string()));
    }
    words.push("c".to_string());
    words.extend(mode.flags().iter().map(|f| f.to_string()));
    words.push(quote(&source.to_string_lossy()));
    words.join(" ")
  }

  pub fn compile(&self, source: &Path, mode: BuildMode, quiet: bool) -> Result<ExitCode, ProcessError> {
    let cmd = self.compile_command(source, mode, quiet);
    self.runner.run(&cmd, self.run_options())
  }

  /// Strip symbols from the artifact. Its existence is not checked first.
  pub fn strip(&self, artifact: &str) -> Result<ExitCode, ProcessError> {
    let cmd = format!("{} {}", quote(&self.config.stripper), quote(artifact));
    self.runner.run(&cmd, self.run_options())
  }

  /// Compress the artifact with the executable packer.
  pub fn pack(&self, artifact: &str) -> Result<ExitCode, ProcessError> {
    let cmd = format!("{} {}", quote(&self.config.packer), quote(artifact));
    self.runner.run(&cmd, self.run_options())
  }

  /// Install the dependencies declared in the manifest, and nothing else.
  pub fn install_dependencies(&self) -> Result<ExitCode, ProcessError> {
    let cmd = format!("{} install -d", quote(&self.config.installer));
    self.runner.run(&cmd, self.run_options())
  }

  pub fn edit(&self, path: &Path) -> Result<ExitCode, ProcessError> {
    let cmd = format!("{} {}", quote(&self.config.editor), quote(&path.to_string_lossy()));
    self.runner.run(&cmd, self.run_options())
  }

  /// First line of the compiler's `--version` output, stderr included.
  ///
  /// Returns an empty string when the compiler printed nothing.
  pub fn version(&self) -> Result<String, ProcessError> {
    let cmd = format!("{} --version", quote(&self.config.compiler));
    let captured = self.runner.run_capture(&cmd)?;
    if !captured.success() {
      debug!(code = captured.code, "version query exited non-zero");
    }
    Ok(captured.combined().lines().next().unwrap_or_default().trim_end().to_string())
  }
}
