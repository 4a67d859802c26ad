//! Template content for project scaffolding.

/// Dependency manifest written by `rod nimble`.
pub const MANIFEST_TEMPLATE: &str = r#"# Package

version       = "0.1.0"
author        = "..."
description   = "..."
license       = "MIT"
# srcDir        = "src"
# bin           = @["alap"]


# Dependencies

requires "nim >= 0.19.0"
"#;

/// Final cursor position marker in VS Code snippet bodies.
pub const SNIPPET_CURSOR: &str = "$0";
