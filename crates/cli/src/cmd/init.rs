//! Implementation of `rod init` and its parts (`alap`, `pykot`, `nimble`).

use anyhow::Result;

use rod_lib::init::{HelperResult, InitError, InitStep, Scaffolded, SkeletonResult, SkeletonSource, run_step};
use rod_lib::{ExitCode, ProcessRunner};

use super::Context;
use crate::output::{print_error, print_info, print_success, print_warning};

/// Run every scaffolding step, reporting each one.
///
/// Refusals are reported and skipped. The exit code is 1 only when a step hit
/// an I/O error.
pub fn cmd_init<R: ProcessRunner>(ctx: &Context<R>) -> Result<ExitCode> {
  let reports = rod_lib::init::init_project(&ctx.work_dir, &ctx.config);

  let mut failed = false;
  for report in reports {
    match report.outcome {
      Ok(done) => print_scaffolded(&done),
      Err(err) => {
        tracing::debug!(step = report.step.verb(), error = %err, "init step did not complete");
        print_refusal(&err);
        failed |= !err.is_precondition();
      }
    }
  }

  Ok(if failed { 1 } else { 0 })
}

/// Run a single scaffolding step.
pub fn cmd_step<R: ProcessRunner>(ctx: &Context<R>, step: InitStep) -> Result<ExitCode> {
  match run_step(step, &ctx.work_dir, &ctx.config) {
    Ok(done) => {
      print_scaffolded(&done);
      Ok(0)
    }
    Err(err) if err.is_precondition() => {
      print_refusal(&err);
      Ok(0)
    }
    Err(err) => Err(err.into()),
  }
}

fn print_scaffolded(done: &Scaffolded) {
  match done {
    Scaffolded::Skeleton(SkeletonResult { path, source }) => {
      let name = file_name(path);
      match source {
        SkeletonSource::Snippet(_) => print_success(&format!("{} was created using your VS Code Nim snippet", name)),
        SkeletonSource::Empty => print_success(&format!("an empty {} was created", name)),
        SkeletonSource::EmptyAfterSnippetError { snippet, reason } => {
          print_warning(&format!("couldn't process the file {}: {}", snippet.display(), reason));
          print_success(&format!("an empty {} was created", name));
        }
      }
    }
    Scaffolded::Helper(HelperResult { path, replaced }) => {
      let name = file_name(path);
      if *replaced {
        print_info(&format!("{} exists in the current folder, deleting it", name));
      }
      print_success(&format!("{}'s latest version was copied to the current folder", name));
    }
    Scaffolded::Manifest(path) => print_success(&format!("{} was created", file_name(path))),
  }
}

fn print_refusal(err: &InitError) {
  match err {
    InitError::HelperMissing { .. } | InitError::ManifestExists { .. } => print_warning(&err.to_string()),
    _ => print_error(&err.to_string()),
  }
}

fn file_name(path: &std::path::Path) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| path.display().to_string())
}
