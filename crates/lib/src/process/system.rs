//! Runner that spawns real child processes with `std::process`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use super::{Captured, ExitCode, ProcessError, ProcessRunner, RunOptions, split_command};
use crate::consts::SEPARATOR_WIDTH;

/// Spawns child processes and waits for them.
///
/// Children inherit the environment. When a working directory is set, they run
/// inside it, and relative program paths such as `./demo` are resolved against
/// it rather than against the parent's directory.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
  work_dir: Option<PathBuf>,
}

impl SystemRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Run every child inside `dir`.
  pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
    Self {
      work_dir: Some(dir.into()),
    }
  }

  fn command(&self, command_line: &str) -> Result<(String, Command), ProcessError> {
    let (program, args) = split_command(command_line)?;

    let mut command = Command::new(self.resolve_program(&program));
    command.args(&args);

    if let Some(dir) = &self.work_dir {
      if !dir.is_dir() {
        return Err(ProcessError::MissingWorkDir { path: dir.clone() });
      }
      command.current_dir(dir);
    }

    debug!(program = %program, args = ?args, work_dir = ?self.work_dir, "spawning process");
    Ok((program, command))
  }

  fn resolve_program(&self, program: &str) -> PathBuf {
    let path = Path::new(program);
    match &self.work_dir {
      Some(dir) if path.is_relative() && path.components().count() > 1 => dir.join(path),
      _ => path.to_path_buf(),
    }
  }
}

impl ProcessRunner for SystemRunner {
  fn run(&self, command_line: &str, options: RunOptions) -> Result<ExitCode, ProcessError> {
    if options.echo {
      eprintln!("# {}", command_line);
    }
    if options.separator {
      eprintln!("{}", "-".repeat(SEPARATOR_WIDTH));
    }

    let (program, mut command) = self.command(command_line)?;
    let status = command
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .status()
      .map_err(|e| spawn_error(program, e))?;

    let code = exit_code(status);
    info!(cmd = %command_line, code, "process finished");
    Ok(code)
  }

  fn run_capture(&self, command_line: &str) -> Result<Captured, ProcessError> {
    let (program, mut command) = self.command(command_line)?;
    let output = command
      .stdin(Stdio::null())
      .output()
      .map_err(|e| spawn_error(program, e))?;

    let captured = Captured {
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      code: exit_code(output.status),
    };
    debug!(cmd = %command_line, code = captured.code, "captured process output");
    Ok(captured)
  }
}

fn spawn_error(program: String, source: std::io::Error) -> ProcessError {
  if source.kind() == ErrorKind::NotFound {
    ProcessError::NotFound { program }
  } else {
    ProcessError::Spawn { program, source }
  }
}

fn exit_code(status: ExitStatus) -> ExitCode {
  match status.code() {
    Some(code) => code,
    None => terminated_by_signal(status),
  }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> ExitCode {
  use std::os::unix::process::ExitStatusExt;
  match status.signal() {
    Some(signal) => 128 + signal,
    None => -1,
  }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> ExitCode {
  -1
}
