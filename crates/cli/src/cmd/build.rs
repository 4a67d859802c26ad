//! Implementation of the build verbs (`c`, `rel`, `small1`-`small3`) and `cr`.

use std::path::Path;

use anyhow::{Context as _, Result};

use rod_lib::build::{BuildMode, BuildPipeline, ChainPolicy, Variant, artifact_name};
use rod_lib::consts::EXIT_USAGE;
use rod_lib::script::run_artifact;
use rod_lib::{ExitCode, ProcessRunner};

use super::Context;
use crate::output::{print_error, print_tip, print_warning};

/// Report a missing source argument.
pub(crate) fn missing_source(verb: &str, message: &str) -> ExitCode {
  print_error(message);
  print_tip(&format!("Tip: rod {} <input.nim>", verb));
  EXIT_USAGE
}

/// Build `source` as `variant` and return the chain's exit code.
pub fn cmd_build<R: ProcessRunner>(ctx: &Context<R>, variant: Variant, source: Option<&Path>) -> Result<ExitCode> {
  let Some(source) = source else {
    return Ok(missing_source(variant.as_str(), "provide the source file too!"));
  };

  let toolchain = ctx.toolchain();
  let policy = ChainPolicy::from_keep_going(ctx.config.keep_going);
  let report = BuildPipeline::new(&toolchain, policy).run(variant, source)?;

  if !report.skipped.is_empty() {
    let skipped: Vec<String> = report.skipped.iter().map(|s| s.to_string()).collect();
    print_warning(&format!(
      "{}: a step failed with exit code {}; skipped {}",
      variant,
      report.exit_code(),
      skipped.join(", ")
    ));
  }

  Ok(report.exit_code())
}

/// Compile `source` in debug mode and, if that succeeds, run it with `args`.
pub fn cmd_compile_run<R: ProcessRunner>(ctx: &Context<R>, source: Option<&Path>, args: &[String]) -> Result<ExitCode> {
  let Some(source) = source else {
    return Ok(missing_source("cr", "provide the source file too!"));
  };

  let toolchain = ctx.toolchain();
  let code = toolchain.compile(source, BuildMode::Debug, false)?;
  if code != 0 {
    return Ok(code);
  }

  let artifact =
    artifact_name(source).with_context(|| format!("cannot derive an executable name from {}", source.display()))?;
  Ok(run_artifact(&toolchain, &artifact, args)?)
}
