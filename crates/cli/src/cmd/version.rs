//! Implementation of `rod ver`.

use std::path::Path;

use anyhow::{Context as _, Result};

use rod_lib::{ExitCode, ProcessRunner};

use super::Context;
use crate::output::print_warning;

pub fn cmd_version<R: ProcessRunner>(ctx: &Context<R>, output: Option<&Path>) -> Result<ExitCode> {
  let version = ctx.toolchain().version()?;
  if version.is_empty() {
    print_warning(&format!("{} printed no version information", ctx.config.compiler));
  } else {
    println!("{}", version);
  }

  if let Some(output) = output {
    let path = ctx.work_dir.join(output);
    std::fs::write(&path, format!("{}\n", version))
      .with_context(|| format!("Failed to write version to {}", path.display()))?;
  }

  Ok(0)
}
