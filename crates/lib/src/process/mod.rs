//! External process execution.
//!
//! Everything the tool does to the outside world goes through a
//! [`ProcessRunner`]: the compiler, the stripper and packer, the editor, the
//! package installer and the built artifact itself. A command line is a single
//! string split with shell-word rules (quotes and backslash escapes) into a
//! program and its arguments. There is no shell in between, so pipes,
//! redirects and variable expansion are not available.
//!
//! # Submodules
//!
//! - [`system`] - runner that spawns real child processes
//! - `testing` - recording double (with the `testing` feature or in tests)

pub mod system;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::path::PathBuf;

use thiserror::Error;

pub use system::SystemRunner;

/// Exit status of a child process, or of the tool itself.
pub type ExitCode = i32;

/// Errors that prevent a child process from producing an exit status.
#[derive(Debug, Error)]
pub enum ProcessError {
  /// The command line contained no program.
  #[error("empty command line")]
  EmptyCommand,

  /// The command line has unbalanced quotes or a dangling escape.
  #[error("cannot split command line: {command}")]
  Unparseable { command: String },

  /// The program could not be located.
  #[error("program not found: {program}")]
  NotFound { program: String },

  /// The program exists but spawning or waiting on it failed.
  #[error("failed to run {program}: {source}")]
  Spawn { program: String, source: std::io::Error },

  /// A working directory was configured but does not exist.
  #[error("working directory does not exist: {}", path.display())]
  MissingWorkDir { path: PathBuf },
}

/// How a streamed command should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
  /// Print `# <command line>` before running.
  pub echo: bool,
  /// Print a horizontal separator before running.
  pub separator: bool,
}

impl Default for RunOptions {
  fn default() -> Self {
    Self {
      echo: true,
      separator: false,
    }
  }
}

/// Output of a command run with [`ProcessRunner::run_capture`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
  pub stdout: String,
  pub stderr: String,
  pub code: ExitCode,
}

impl Captured {
  /// Stdout followed by stderr, the way a terminal would have shown them.
  pub fn combined(&self) -> String {
    let mut text = self.stdout.clone();
    text.push_str(&self.stderr);
    text
  }

  pub fn success(&self) -> bool {
    self.code == 0
  }
}

/// Runs external command lines synchronously.
pub trait ProcessRunner {
  /// Run a command with inherited stdio and return its exit code.
  fn run(&self, command_line: &str, options: RunOptions) -> Result<ExitCode, ProcessError>;

  /// Run a command and collect its output as text.
  fn run_capture(&self, command_line: &str) -> Result<Captured, ProcessError>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
  fn run(&self, command_line: &str, options: RunOptions) -> Result<ExitCode, ProcessError> {
    (**self).run(command_line, options)
  }

  fn run_capture(&self, command_line: &str) -> Result<Captured, ProcessError> {
    (**self).run_capture(command_line)
  }
}

/// Split a command line into a program and its arguments.
pub fn split_command(command_line: &str) -> Result<(String, Vec<String>), ProcessError> {
  let mut words = shlex::split(command_line)
    .ok_or_else(|| ProcessError::Unparseable {
      command: command_line.to_string(),
    })?
    .into_iter();
  let program = words.next().ok_or(ProcessError::EmptyCommand)?;
  Ok((program, words.collect()))
}

/// Quote a single word so that [`split_command`] yields it back unchanged.
///
/// Plain words are returned as they are.
pub fn quote(word: &str) -> String {
  match shlex::try_quote(word) {
    Ok(quoted) => quoted.into_owned(),
    // Only interior NUL bytes are rejected, and no path can contain one.
    Err(_) => word.to_string(),
  }
}
