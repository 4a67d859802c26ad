//! Project scaffolding.
//!
//! This module provides the file operations behind `rod init` and its three
//! parts, each usable on its own:
//! - `alap.nim` skeleton source, taken from the user's VS Code snippet when one
//!   exists
//! - a fresh copy of the helper library
//! - `alap.nimble` dependency manifest
//!
//! It also locates the manifest for `rod ad`.
//!
//! Refusals (a file already exists, the helper library is missing) are
//! reported as [`InitError`] values for which [`InitError::is_precondition`]
//! holds; nothing is written in those cases.

mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::consts::{MANIFEST_EXTENSION, MANIFEST_FILE, SKELETON_FILE, SNIPPET_KEY};

pub use templates::{MANIFEST_TEMPLATE, SNIPPET_CURSOR};

/// Errors that can occur during scaffolding.
#[derive(Debug, Error)]
pub enum InitError {
  #[error("{} already exists", path.display())]
  PathExists { path: PathBuf },

  #[error("{} already exists", path.display())]
  ManifestExists { path: PathBuf },

  #[error("helper library not found: {}", path.display())]
  HelperMissing { path: PathBuf },

  #[error("no .nimble file was found in {}", dir.display())]
  NoManifest { dir: PathBuf },

  #[error("found {} .nimble files in {}, expected exactly one", found.len(), dir.display())]
  MultipleManifests { dir: PathBuf, found: Vec<PathBuf> },

  #[error("failed to read directory {}: {source}", path.display())]
  ReadDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to remove file {}: {source}", path.display())]
  RemoveFile { path: PathBuf, source: std::io::Error },

  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  CopyFile {
    from: PathBuf,
    to: PathBuf,
    source: std::io::Error,
  },
}

impl InitError {
  /// Whether this is a refusal to act rather than an I/O failure.
  pub fn is_precondition(&self) -> bool {
    matches!(
      self,
      InitError::PathExists { .. }
        | InitError::ManifestExists { .. }
        | InitError::HelperMissing { .. }
        | InitError::NoManifest { .. }
        | InitError::MultipleManifests { .. }
    )
  }
}

/// Where the skeleton's content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonSource {
  /// The snippet file's body.
  Snippet(PathBuf),
  /// No snippet file; the skeleton is empty.
  Empty,
  /// The snippet file could not be used; the skeleton is empty.
  EmptyAfterSnippetError { snippet: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonResult {
  pub path: PathBuf,
  pub source: SkeletonSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperResult {
  pub path: PathBuf,
  /// A previous copy was removed first.
  pub replaced: bool,
}

/// Create `alap.nim` in `dir`.
///
/// # Errors
///
/// Returns [`InitError::PathExists`] if the file is already there; the
/// existing file is not touched.
pub fn create_skeleton(dir: &Path, snippet_file: &Path) -> Result<SkeletonResult, InitError> {
  let path = dir.join(SKELETON_FILE);
  if path.exists() {
    return Err(InitError::PathExists { path });
  }

  let (content, source) = if !snippet_file.is_file() {
    (String::new(), SkeletonSource::Empty)
  } else {
    match snippet_body(snippet_file) {
      Ok(body) => (body, SkeletonSource::Snippet(snippet_file.to_path_buf())),
      Err(reason) => {
        warn!(snippet = %snippet_file.display(), reason = %reason, "could not use snippet file");
        (
          String::new(),
          SkeletonSource::EmptyAfterSnippetError {
            snippet: snippet_file.to_path_buf(),
            reason,
          },
        )
      }
    }
  };

  fs::write(&path, content).map_err(|source| InitError::WriteFile {
    path: path.clone(),
    source,
  })?;

  Ok(SkeletonResult { path, source })
}

/// Read the `alap` snippet body, one output line per body entry, with the
/// cursor marker removed.
fn snippet_body(snippet_file: &Path) -> Result<String, String> {
  let content = fs::read_to_string(snippet_file).map_err(|e| e.to_string())?;
  let doc: serde_json::Value = serde_json::from_str(&content).map_err(|e| e.to_string())?;

  let body = doc
    .get(SNIPPET_KEY)
    .and_then(|snippet| snippet.get("body"))
    .ok_or_else(|| format!("no \"{SNIPPET_KEY}.body\" entry"))?;

  let lines: Vec<&str> = match body {
    serde_json::Value::String(line) => vec![line.as_str()],
    serde_json::Value::Array(items) => items
      .iter()
      .map(|item| item.as_str().ok_or_else(|| "snippet body must contain strings".to_string()))
      .collect::<Result<_, _>>()?,
    _ => return Err("snippet body must be a string or a list of strings".to_string()),
  };

  let mut out = String::new();
  for line in lines {
    out.push_str(&line.replace(SNIPPET_CURSOR, ""));
    out.push('\n');
  }
  Ok(out)
}

/// Copy the helper library into `dir`, replacing any previous copy.
///
/// # Errors
///
/// Returns [`InitError::HelperMissing`] if the library does not exist; the
/// working directory is left untouched.
pub fn copy_helper(dir: &Path, helper_library: &Path) -> Result<HelperResult, InitError> {
  if !helper_library.is_file() {
    return Err(InitError::HelperMissing {
      path: helper_library.to_path_buf(),
    });
  }

  let file_name = helper_library.file_name().ok_or_else(|| InitError::HelperMissing {
    path: helper_library.to_path_buf(),
  })?;
  let target = dir.join(file_name);

  let replaced = target.is_file();
  if replaced {
    debug!(path = %target.display(), "removing previous helper copy");
    fs::remove_file(&target).map_err(|source| InitError::RemoveFile {
      path: target.clone(),
      source,
    })?;
  }

  fs::copy(helper_library, &target).map_err(|source| InitError::CopyFile {
    from: helper_library.to_path_buf(),
    to: target.clone(),
    source,
  })?;

  Ok(HelperResult { path: target, replaced })
}

/// Write `alap.nimble` in `dir` from [`MANIFEST_TEMPLATE`].
pub fn create_manifest(dir: &Path) -> Result<PathBuf, InitError> {
  let path = dir.join(MANIFEST_FILE);
  if path.exists() {
    return Err(InitError::ManifestExists { path });
  }

  fs::write(&path, MANIFEST_TEMPLATE).map_err(|source| InitError::WriteFile {
    path: path.clone(),
    source,
  })?;
  Ok(path)
}

/// Find the single `*.nimble` file directly inside `dir`.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, InitError> {
  let entries = fs::read_dir(dir).map_err(|source| InitError::ReadDir {
    path: dir.to_path_buf(),
    source,
  })?;

  let mut found: Vec<PathBuf> = entries
    .flatten()
    .map(|entry| entry.path())
    .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == MANIFEST_EXTENSION))
    .collect();
  found.sort();

  match found.len() {
    0 => Err(InitError::NoManifest { dir: dir.to_path_buf() }),
    1 => Ok(found.remove(0)),
    _ => Err(InitError::MultipleManifests {
      dir: dir.to_path_buf(),
      found,
    }),
  }
}

/// One part of `rod init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
  Skeleton,
  Helper,
  Manifest,
}

impl InitStep {
  pub const ALL: [InitStep; 3] = [InitStep::Skeleton, InitStep::Helper, InitStep::Manifest];

  /// The verb that runs this step on its own.
  pub fn verb(self) -> &'static str {
    match self {
      InitStep::Skeleton => "alap",
      InitStep::Helper => "pykot",
      InitStep::Manifest => "nimble",
    }
  }
}

/// What a successful step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scaffolded {
  Skeleton(SkeletonResult),
  Helper(HelperResult),
  Manifest(PathBuf),
}

#[derive(Debug)]
pub struct StepReport {
  pub step: InitStep,
  pub outcome: Result<Scaffolded, InitError>,
}

/// Run one scaffolding step.
pub fn run_step(step: InitStep, dir: &Path, config: &Config) -> Result<Scaffolded, InitError> {
  match step {
    InitStep::Skeleton => create_skeleton(dir, &config.snippet_file).map(Scaffolded::Skeleton),
    InitStep::Helper => copy_helper(dir, &config.helper_library).map(Scaffolded::Helper),
    InitStep::Manifest => create_manifest(dir).map(Scaffolded::Manifest),
  }
}

/// Run every step in order. A failed step does not stop the ones after it;
/// the caller gets one report per step.
pub fn init_project(dir: &Path, config: &Config) -> Vec<StepReport> {
  InitStep::ALL
    .into_iter()
    .map(|step| StepReport {
      step,
      outcome: run_step(step, dir, config),
    })
    .collect()
}
