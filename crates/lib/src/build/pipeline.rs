//! Step chain execution.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::types::{BuildReport, ChainPolicy, Step, StepResult, Variant, artifact_name};
use crate::process::{ProcessError, ProcessRunner};
use crate::toolchain::Toolchain;

#[derive(Debug, Error)]
pub enum BuildError {
  /// No artifact name can be derived for a variant with post-processing steps.
  #[error("cannot derive an executable name from {}", source_path.display())]
  NoArtifactName { source_path: PathBuf },

  #[error(transparent)]
  Process(#[from] ProcessError),
}

/// Runs a variant's steps in order.
///
/// A step that cannot be spawned at all aborts the chain with an error under
/// either policy.
pub struct BuildPipeline<'t, 'a, R> {
  toolchain: &'t Toolchain<'a, R>,
  policy: ChainPolicy,
}

impl<'t, 'a, R: ProcessRunner> BuildPipeline<'t, 'a, R> {
  pub fn new(toolchain: &'t Toolchain<'a, R>, policy: ChainPolicy) -> Self {
    Self { toolchain, policy }
  }

  pub fn run(&self, variant: Variant, source: &Path) -> Result<BuildReport, BuildError> {
    let steps = variant.steps();
    let artifact = artifact_name(source);
    if steps.iter().any(|s| !matches!(s, Step::Compile { .. })) {
      require_artifact(artifact.as_deref(), source)?;
    }

    let mut report = BuildReport::default();
    for step in steps {
      if !report.success() && self.policy == ChainPolicy::ShortCircuit {
        report.skipped.push(step);
        continue;
      }

      let code = match step {
        Step::Compile { mode, quiet } => self.toolchain.compile(source, mode, quiet)?,
        Step::Strip => self.toolchain.strip(require_artifact(artifact.as_deref(), source)?)?,
        Step::Pack => self.toolchain.pack(require_artifact(artifact.as_deref(), source)?)?,
      };

      if code != 0 {
        warn!(variant = %variant, step = %step, code, "build step failed");
      }
      report.completed.push(StepResult { step, code });
    }

    if !report.skipped.is_empty() {
      info!(variant = %variant, skipped = report.skipped.len(), "remaining steps skipped");
    }
    Ok(report)
  }
}

/// The executable name post-processing steps work on.
fn require_artifact<'s>(artifact: Option<&'s str>, source: &Path) -> Result<&'s str, BuildError> {
  artifact.ok_or_else(|| BuildError::NoArtifactName {
    source_path: source.to_path_buf(),
  })
}
