//! Running built artifacts, and script mode.
//!
//! Script mode (`rod s demo.nim args...`) treats a compiled source file like a
//! script: compile it quietly, run the executable, then delete the executable
//! again. Deletion is tied to an [`ArtifactGuard`] so it happens on every path
//! out of the run, including an error from the runner and unwinding.

mod guard;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

pub use guard::{ArtifactGuard, Cleanup};

use crate::build::{BuildError, BuildPipeline, ChainPolicy, Variant, artifact_name};
use crate::consts::SOURCE_EXTENSION;
use crate::process::{ExitCode, ProcessError, ProcessRunner, RunOptions, quote};
use crate::toolchain::Toolchain;

#[derive(Debug, Error)]
pub enum ScriptError {
  /// The path does not name a `.nim` source file.
  #[error("not a .nim source file: {}", path.display())]
  NotASource { path: PathBuf },

  #[error(transparent)]
  Build(#[from] BuildError),

  #[error(transparent)]
  Process(#[from] ProcessError),
}

/// Result of a script-mode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
  /// Compilation failed; nothing was run or deleted.
  CompileFailed { code: ExitCode },
  /// The artifact ran and cleanup was attempted.
  Ran { run_exit_code: ExitCode, cleanup: Cleanup },
}

impl ScriptOutcome {
  /// The code the tool should exit with: the compiler's or the program's.
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ScriptOutcome::CompileFailed { code } => *code,
      ScriptOutcome::Ran { run_exit_code, .. } => *run_exit_code,
    }
  }

  /// Whether the artifact is gone afterwards. `None` when nothing ran.
  pub fn cleanup_succeeded(&self) -> Option<bool> {
    match self {
      ScriptOutcome::CompileFailed { .. } => None,
      ScriptOutcome::Ran { cleanup, .. } => Some(cleanup.succeeded()),
    }
  }
}

/// Command line that runs `artifact` from the working directory.
///
/// The artifact name is quoted. Arguments are joined with single spaces and
/// not re-quoted, so an argument that contains whitespace reaches the program
/// split into several.
pub fn artifact_command(artifact: &str, args: &[String]) -> String {
  let mut cmd = quote(&format!("./{}", artifact));
  for arg in args {
    cmd.push(' ');
    cmd.push_str(arg);
  }
  cmd
}

/// Run a built artifact with forwarded arguments, after a separator line.
pub fn run_artifact<R: ProcessRunner>(
  toolchain: &Toolchain<'_, R>,
  artifact: &str,
  args: &[String],
) -> Result<ExitCode, ProcessError> {
  let options = RunOptions {
    echo: toolchain.config().echo_commands,
    separator: true,
  };
  toolchain.runner().run(&artifact_command(artifact, args), options)
}

/// Whether `path` carries the source extension.
pub fn is_source_file(path: &Path) -> bool {
  path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Compile `source` quietly, run it, and delete the executable.
///
/// `work_dir` is the directory the compiler writes the executable into and
/// the runner runs in.
pub fn run_ephemeral<R: ProcessRunner>(
  toolchain: &Toolchain<'_, R>,
  work_dir: &Path,
  source: &Path,
  args: &[String],
) -> Result<ScriptOutcome, ScriptError> {
  if !is_source_file(source) {
    return Err(ScriptError::NotASource {
      path: source.to_path_buf(),
    });
  }
  let artifact = artifact_name(source).ok_or_else(|| ScriptError::NotASource {
    path: source.to_path_buf(),
  })?;

  let report = BuildPipeline::new(toolchain, ChainPolicy::ShortCircuit).run(Variant::Script, source)?;
  if !report.success() {
    info!(source = %source.display(), code = report.exit_code(), "compilation failed, not running");
    return Ok(ScriptOutcome::CompileFailed {
      code: report.exit_code(),
    });
  }

  let guard = ArtifactGuard::new(work_dir.join(&artifact));
  let run_exit_code = run_artifact(toolchain, &artifact, args)?;
  let cleanup = guard.release();

  if !cleanup.succeeded() {
    warn!(artifact = %artifact, cleanup = ?cleanup, "executable was not removed");
  }

  Ok(ScriptOutcome::Ran { run_exit_code, cleanup })
}
