//! Tool configuration.
//!
//! Every external program and well-known file location the dispatcher touches
//! is named here rather than hardcoded at the call site. Values are resolved in
//! layers: built-in defaults, then an optional JSON file, then `ROD_*`
//! environment variables. The CLI applies its own flags on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::platform::paths::{config_file, home_dir};

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config file not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read config file {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("invalid config file {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("invalid value for {var}: expected true/false, got '{value}'")]
  InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Compiler executable.
  pub compiler: String,
  /// Symbol stripping tool run by `small2`/`small3`.
  pub stripper: String,
  /// Executable packer run by `small3`.
  pub packer: String,
  /// Package manager used by `rod id`.
  pub installer: String,
  /// Editor opened by `rod ad`.
  pub editor: String,
  /// Helper library copied into the working directory by `rod pykot`.
  pub helper_library: PathBuf,
  /// VS Code snippet file the skeleton source is taken from.
  pub snippet_file: PathBuf,
  /// Echo each command line before running it.
  pub echo_commands: bool,
  /// Keep running strip/pack steps after an earlier step failed.
  pub keep_going: bool,
}

impl Default for Config {
  fn default() -> Self {
    let home = home_dir();
    Self {
      compiler: "nim".to_string(),
      stripper: "strip".to_string(),
      packer: "upx".to_string(),
      installer: "nimble".to_string(),
      editor: "vim".to_string(),
      helper_library: home.join("Dropbox/nim/NimPyKot/src/pykot.nim"),
      snippet_file: home.join(".config/Code/User/snippets/nim.json"),
      echo_commands: true,
      keep_going: false,
    }
  }
}

impl Config {
  /// Load configuration from the default file location and the environment.
  ///
  /// A missing default file is not an error.
  pub fn load() -> Result<Self, ConfigError> {
    let path = config_file();
    let mut config = if path.is_file() {
      Self::from_file(&path)?
    } else {
      Self::default()
    };
    config.apply_env()?;
    Ok(config)
  }

  /// Load configuration from an explicit file, then apply the environment.
  pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      return Err(ConfigError::NotFound {
        path: path.to_path_buf(),
      });
    }
    let mut config = Self::from_file(path)?;
    config.apply_env()?;
    Ok(config)
  }

  fn from_file(path: &Path) -> Result<Self, ConfigError> {
    debug!(path = %path.display(), "loading config file");
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Override fields from `ROD_*` environment variables.
  pub fn apply_env(&mut self) -> Result<(), ConfigError> {
    let strings: [(&str, &mut String); 5] = [
      ("ROD_COMPILER", &mut self.compiler),
      ("ROD_STRIP", &mut self.stripper),
      ("ROD_PACKER", &mut self.packer),
      ("ROD_INSTALLER", &mut self.installer),
      ("ROD_EDITOR", &mut self.editor),
    ];
    for (var, field) in strings {
      if let Some(value) = non_empty_var(var) {
        debug!(var, value = %value, "config override from environment");
        *field = value;
      }
    }

    if let Some(value) = non_empty_var("ROD_HELPER_LIBRARY") {
      self.helper_library = PathBuf::from(value);
    }
    if let Some(value) = non_empty_var("ROD_SNIPPET_FILE") {
      self.snippet_file = PathBuf::from(value);
    }
    if let Some(value) = non_empty_var("ROD_KEEP_GOING") {
      self.keep_going = parse_bool("ROD_KEEP_GOING", &value)?;
    }

    Ok(())
  }
}

fn non_empty_var(var: &str) -> Option<String> {
  std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(ConfigError::InvalidBool {
      var,
      value: value.to_string(),
    }),
  }
}
