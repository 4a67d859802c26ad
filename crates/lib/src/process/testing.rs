//! Recording process double.
//!
//! [`RecordingRunner`] never spawns anything. It records every command line it
//! is asked to run and answers with scripted replies, in order. Once the script
//! is exhausted every command succeeds with exit code 0.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{Captured, ExitCode, ProcessError, ProcessRunner, RunOptions, split_command};

/// Scripted answer to one command.
#[derive(Debug, Clone)]
pub enum Reply {
  /// Exit with the given code and no output.
  Exit(ExitCode),
  /// Exit with the given code after printing `stdout`.
  Output(String, ExitCode),
  /// Behave as if the program did not exist.
  NotFound,
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub command_line: String,
  /// `None` for captured runs.
  pub options: Option<RunOptions>,
}

#[derive(Debug, Default)]
pub struct RecordingRunner {
  calls: RefCell<Vec<Invocation>>,
  replies: RefCell<VecDeque<Reply>>,
}

impl RecordingRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Runner that answers the first commands with `replies`, in order.
  pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
    Self {
      calls: RefCell::default(),
      replies: RefCell::new(replies.into_iter().collect()),
    }
  }

  /// Runner whose first commands exit with `codes`, in order.
  pub fn with_exit_codes(codes: impl IntoIterator<Item = ExitCode>) -> Self {
    Self::with_replies(codes.into_iter().map(Reply::Exit))
  }

  /// All recorded calls, oldest first.
  pub fn invocations(&self) -> Vec<Invocation> {
    self.calls.borrow().clone()
  }

  /// Recorded command lines, oldest first.
  pub fn commands(&self) -> Vec<String> {
    self.calls.borrow().iter().map(|c| c.command_line.clone()).collect()
  }

  pub fn call_count(&self) -> usize {
    self.calls.borrow().len()
  }

  fn answer(&self, command_line: &str, options: Option<RunOptions>) -> Result<Captured, ProcessError> {
    let (program, _) = split_command(command_line)?;
    self.calls.borrow_mut().push(Invocation {
      command_line: command_line.to_string(),
      options,
    });

    match self.replies.borrow_mut().pop_front() {
      None | Some(Reply::Exit(0)) => Ok(Captured::default()),
      Some(Reply::Exit(code)) => Ok(Captured {
        code,
        ..Captured::default()
      }),
      Some(Reply::Output(stdout, code)) => Ok(Captured {
        stdout,
        stderr: String::new(),
        code,
      }),
      Some(Reply::NotFound) => Err(ProcessError::NotFound { program }),
    }
  }
}

impl ProcessRunner for RecordingRunner {
  fn run(&self, command_line: &str, options: RunOptions) -> Result<ExitCode, ProcessError> {
    self.answer(command_line, Some(options)).map(|c| c.code)
  }

  fn run_capture(&self, command_line: &str) -> Result<Captured, ProcessError> {
    self.answer(command_line, None)
  }
}
