//! Names and fixed values shared across the crate.

pub const APP_NAME: &str = "rod";

/// Extension of compiler source files, without the leading dot.
pub const SOURCE_EXTENSION: &str = "nim";

/// Extension of dependency manifests, without the leading dot.
pub const MANIFEST_EXTENSION: &str = "nimble";

/// Skeleton source file created by `rod alap`.
pub const SKELETON_FILE: &str = "alap.nim";

/// Dependency manifest created by `rod nimble`.
pub const MANIFEST_FILE: &str = "alap.nimble";

/// Snippet key holding the skeleton body in the editor snippet file.
pub const SNIPPET_KEY: &str = "alap";

/// Exit code for a missing or malformed command-line argument.
pub const EXIT_USAGE: i32 = 1;

/// Width of the separator printed before running a built artifact.
pub const SEPARATOR_WIDTH: usize = 78;
