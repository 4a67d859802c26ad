//! Build vocabulary: modes, steps, variants and the report of a chain run.

use std::fmt;
use std::path::Path;

use crate::process::ExitCode;

/// Optimisation level passed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
  Debug,
  Release,
  SizeOptimized,
}

impl BuildMode {
  /// Compiler flags for this mode, in order.
  pub fn flags(self) -> &'static [&'static str] {
    match self {
      BuildMode::Debug => &[],
      BuildMode::Release => &["-d:release"],
      BuildMode::SizeOptimized => &["-d:release", "--opt:size"],
    }
  }
}

/// One step of a build chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Compile { mode: BuildMode, quiet: bool },
  Strip,
  Pack,
}

impl fmt::Display for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Step::Compile { .. } => write!(f, "compile"),
      Step::Strip => write!(f, "strip"),
      Step::Pack => write!(f, "pack"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
  Debug,
  Release,
  Small1,
  Small2,
  Small3,
  /// Quiet debug build for ephemeral script runs.
  Script,
}

impl Variant {
  pub fn steps(self) -> Vec<Step> {
    let compile = |mode| Step::Compile { mode, quiet: false };
    match self {
      Variant::Debug => vec![compile(BuildMode::Debug)],
      Variant::Release => vec![compile(BuildMode::Release)],
      Variant::Small1 => vec![compile(BuildMode::SizeOptimized)],
      Variant::Small2 => {
        let mut steps = Variant::Small1.steps();
        steps.push(Step::Strip);
        steps
      }
      Variant::Small3 => {
        let mut steps = Variant::Small2.steps();
        steps.push(Step::Pack);
        steps
      }
      Variant::Script => vec![Step::Compile {
        mode: BuildMode::Debug,
        quiet: true,
      }],
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Variant::Debug => "c",
      Variant::Release => "rel",
      Variant::Small1 => "small1",
      Variant::Small2 => "small2",
      Variant::Small3 => "small3",
      Variant::Script => "s",
    }
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// What happens to the remaining steps after one exits non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainPolicy {
  /// Stop at the first failing step.
  #[default]
  ShortCircuit,
  /// Run every step regardless of earlier failures.
  KeepGoing,
}

impl ChainPolicy {
  pub fn from_keep_going(keep_going: bool) -> Self {
    if keep_going {
      ChainPolicy::KeepGoing
    } else {
      ChainPolicy::ShortCircuit
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
  pub step: Step,
  pub code: ExitCode,
}

/// Outcome of running a variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
  /// Steps that ran, in order.
  pub completed: Vec<StepResult>,
  /// Steps not attempted because an earlier one failed.
  pub skipped: Vec<Step>,
}

impl BuildReport {
  /// Exit code of the first failing step, or 0.
  pub fn exit_code(&self) -> ExitCode {
    self.completed.iter().map(|r| r.code).find(|c| *c != 0).unwrap_or(0)
  }

  pub fn success(&self) -> bool {
    self.exit_code() == 0
  }
}

/// Name of the executable the compiler produces for `source`.
///
/// The compiler writes it next to the working directory's view of the source,
/// named by the file stem: `src/demo.nim` becomes `demo`. Returns `None` for
/// paths without a file name.
pub fn artifact_name(source: &Path) -> Option<String> {
  source
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .filter(|stem| !stem.is_empty())
}
