//! Implementation of `rod s`.

use std::path::Path;

use anyhow::Result;

use rod_lib::script::{Cleanup, ScriptOutcome, is_source_file, run_ephemeral};
use rod_lib::{ExitCode, ProcessRunner};

use super::Context;
use super::build::missing_source;
use crate::output::print_warning;

/// Compile quietly, run, and delete the executable.
///
/// Exits with the program's own exit code, or the compiler's if compilation
/// failed. A failed cleanup is only a warning.
pub fn cmd_script<R: ProcessRunner>(ctx: &Context<R>, source: Option<&Path>, args: &[String]) -> Result<ExitCode> {
  let source = match source {
    Some(source) if is_source_file(source) => source,
    _ => return Ok(missing_source("s", "provide a source file!")),
  };

  let outcome = run_ephemeral(&ctx.toolchain(), &ctx.work_dir, source, args)?;

  if let ScriptOutcome::Ran { cleanup, .. } = &outcome {
    match cleanup {
      Cleanup::Removed | Cleanup::Absent => {}
      Cleanup::Refused => print_warning("not removing the executable: it looks like a source file"),
      Cleanup::NotAFile => print_warning("not removing the executable: it is not a regular file"),
      Cleanup::Failed(reason) => print_warning(&format!("could not remove the executable: {}", reason)),
    }
  }

  Ok(outcome.exit_code())
}
