//! Verb dispatch.
//!
//! [`dispatch`] maps a parsed verb to its handler. Handlers return the exit
//! code the process should end with: 0 on success and for reported refusals,
//! 1 for usage errors, and the external program's own code otherwise.

mod build;
mod deps;
mod init;
mod script;
mod usage;
mod version;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use rod_lib::build::Variant;
use rod_lib::init::InitStep;
use rod_lib::{Config, ExitCode, ProcessRunner, Toolchain};

use crate::cli::Commands;

pub use build::{cmd_build, cmd_compile_run};
pub use deps::{cmd_add_dependency, cmd_install_dependencies};
pub use init::{cmd_init, cmd_step};
pub use script::cmd_script;
pub use usage::cmd_usage;
pub use version::cmd_version;

/// Everything a handler needs: how to run programs, what to run, and where.
pub struct Context<R> {
  pub runner: R,
  pub config: Config,
  pub work_dir: PathBuf,
}

impl<R: ProcessRunner> Context<R> {
  pub fn toolchain(&self) -> Toolchain<'_, R> {
    Toolchain::new(&self.runner, &self.config)
  }
}

pub fn dispatch<R: ProcessRunner>(ctx: &Context<R>, command: Option<Commands>) -> Result<ExitCode> {
  let Some(command) = command else {
    cmd_usage();
    return Ok(0);
  };
  debug!(?command, work_dir = %ctx.work_dir.display(), "dispatching");

  match command {
    Commands::Init => cmd_init(ctx),
    Commands::Alap => cmd_step(ctx, InitStep::Skeleton),
    Commands::Pykot => cmd_step(ctx, InitStep::Helper),
    Commands::Nimble => cmd_step(ctx, InitStep::Manifest),
    Commands::Ad => cmd_add_dependency(ctx),
    Commands::Id => cmd_install_dependencies(ctx),
    Commands::Compile(arg) => cmd_build(ctx, Variant::Debug, arg.source.as_deref()),
    Commands::Release(arg) => cmd_build(ctx, Variant::Release, arg.source.as_deref()),
    Commands::Small1(arg) => cmd_build(ctx, Variant::Small1, arg.source.as_deref()),
    Commands::Small2(arg) => cmd_build(ctx, Variant::Small2, arg.source.as_deref()),
    Commands::Small3(arg) => cmd_build(ctx, Variant::Small3, arg.source.as_deref()),
    Commands::CompileRun(run) => cmd_compile_run(ctx, run.source.as_deref(), &run.args),
    Commands::Script(run) => cmd_script(ctx, run.source.as_deref(), &run.args),
    Commands::Version { output } => cmd_version(ctx, output.as_deref()),
  }
}
