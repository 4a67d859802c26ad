//! Shared utilities.
//!
//! Currently only test helpers.

#[cfg(all(test, unix))]
pub mod testutil;
