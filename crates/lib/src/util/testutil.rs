//! Test utilities for rod-lib.
//!
//! Helpers for tests that need real child processes.

use std::path::Path;

use crate::process::quote;

/// Returns a command line running `script` under `/bin/sh -c`.
pub fn shell_cmd(script: &str) -> String {
  format!("/bin/sh -c {}", quote(script))
}

/// Write an executable shell script at `path`.
pub fn write_script(path: &Path, body: &str) {
  use std::os::unix::fs::PermissionsExt;

  std::fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}
