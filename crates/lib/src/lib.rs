//! rod-lib: build, run and scaffolding logic for the `rod` toolchain helper
//!
//! This crate provides everything `rod` does apart from talking to the terminal:
//! - `ProcessRunner`: the single seam through which external programs run
//! - `Toolchain`: command lines for the compiler, stripper, packer, installer
//!   and editor
//! - `BuildPipeline`: build variants as ordered step chains
//! - `script`: running artifacts, and compile-run-delete script mode
//! - `init`: project scaffolding
//! - `Config`: tool names and file locations

pub mod build;
pub mod config;
pub mod consts;
pub mod init;
pub mod platform;
pub mod process;
pub mod script;
pub mod toolchain;
pub mod util;

pub use config::Config;
pub use process::{ExitCode, ProcessError, ProcessRunner, SystemRunner};
pub use toolchain::Toolchain;
