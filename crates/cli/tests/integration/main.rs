//! End-to-end tests that run `rod` against stand-in toolchain scripts.

#[cfg(unix)]
mod common;

#[cfg(unix)]
mod build_tests;
#[cfg(unix)]
mod init_tests;
#[cfg(unix)]
mod script_tests;
