//! Build variants and the step chain that produces them.
//!
//! A variant is a fixed, ordered list of steps. Each variant extends the one
//! before it by a single post-processing step:
//!
//! | Variant  | Steps                                    |
//! |----------|------------------------------------------|
//! | `debug`  | compile                                  |
//! | `release`| compile `-d:release`                     |
//! | `small1` | compile `-d:release --opt:size`          |
//! | `small2` | `small1`, strip                          |
//! | `small3` | `small2`, pack                           |
//! | `script` | compile quietly (used by `rod s`)        |
//!
//! # Submodules
//!
//! - [`pipeline`] - runs a variant's steps through a [`Toolchain`](crate::toolchain::Toolchain)

pub mod pipeline;
mod types;

pub use pipeline::{BuildError, BuildPipeline};
pub use types::*;
