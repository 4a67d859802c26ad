//! Implementation of `rod ad` and `rod id`.

use std::path::Path;

use anyhow::Result;

use rod_lib::init::{InitError, find_manifest};
use rod_lib::{ExitCode, ProcessRunner};

use super::Context;
use crate::output::print_error;

/// Open the project's only `.nimble` file in the editor.
///
/// With no manifest, or more than one, nothing is opened.
pub fn cmd_add_dependency<R: ProcessRunner>(ctx: &Context<R>) -> Result<ExitCode> {
  let manifest = match find_manifest(&ctx.work_dir) {
    Ok(path) => path,
    Err(err @ (InitError::NoManifest { .. } | InitError::MultipleManifests { .. })) => {
      print_error(&err.to_string());
      return Ok(0);
    }
    Err(err) => return Err(err.into()),
  };

  // The editor runs in the working directory; hand it the bare file name.
  let name = manifest.file_name().map(Path::new).unwrap_or(manifest.as_path());
  Ok(ctx.toolchain().edit(name)?)
}

pub fn cmd_install_dependencies<R: ProcessRunner>(ctx: &Context<R>) -> Result<ExitCode> {
  Ok(ctx.toolchain().install_dependencies()?)
}
