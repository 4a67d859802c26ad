use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::is_source_file;

/// What happened to an artifact when its guard let go of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleanup {
  Removed,
  /// Nothing was there to remove.
  Absent,
  /// The path is a directory or other non-file and was left alone.
  NotAFile,
  /// The path carries the source extension and was left alone.
  Refused,
  /// Removal was attempted and failed.
  Failed(String),
}

impl Cleanup {
  /// True when no artifact remains on disk.
  pub fn succeeded(&self) -> bool {
    matches!(self, Cleanup::Removed | Cleanup::Absent)
  }
}

/// Deletes a built executable when released or dropped.
///
/// A file is only ever removed when it is a regular file and does not carry
/// the source extension, so a guard can never take a source file with it.
#[derive(Debug)]
pub struct ArtifactGuard {
  path: PathBuf,
  released: bool,
}

impl ArtifactGuard {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      released: false,
    }
  }

  /// Delete the artifact now and report what happened.
  pub fn release(mut self) -> Cleanup {
    self.released = true;
    remove_artifact(&self.path)
  }
}

impl Drop for ArtifactGuard {
  fn drop(&mut self) {
    if self.released {
      return;
    }
    let cleanup = remove_artifact(&self.path);
    if !cleanup.succeeded() {
      warn!(path = %self.path.display(), cleanup = ?cleanup, "executable was not removed");
    }
  }
}

fn remove_artifact(path: &Path) -> Cleanup {
  if !path.exists() {
    return Cleanup::Absent;
  }
  if !path.is_file() {
    return Cleanup::NotAFile;
  }
  if is_source_file(path) {
    return Cleanup::Refused;
  }

  match std::fs::remove_file(path) {
    Ok(()) => {
      debug!(path = %path.display(), "removed executable");
      Cleanup::Removed
    }
    Err(e) => Cleanup::Failed(e.to_string()),
  }
}
