//! Shared test helpers for CLI integration tests.

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stand-in compiler.
///
/// Answers `--version`, fails with `$FAKE_NIM_EXIT` when set, and otherwise
/// writes an executable named after the source's stem into the current
/// directory. That executable echoes its arguments and exits with
/// `$FAKE_RUN_EXIT` (default 0). Every invocation is appended to `tools.log`.
const FAKE_COMPILER: &str = r#"#!/bin/sh
echo "nim $*" >> "$FAKE_LOG"
if [ "$1" = "--version" ]; then
  echo "Nim Compiler Version 2.2.0 [Linux: amd64]"
  echo "Copyright (c) 2006-2024 by Andreas Rumpf"
  exit 0
fi
if [ -n "$FAKE_NIM_EXIT" ]; then
  exit "$FAKE_NIM_EXIT"
fi
for arg; do src="$arg"; done
name=$(basename "$src" .nim)
cat > "$name" <<'PROGRAM'
#!/bin/sh
echo "ran with: $*"
exit "${FAKE_RUN_EXIT:-0}"
PROGRAM
chmod +x "$name"
"#;

/// Stand-in for strip, upx, nimble and the editor: logs its name and arguments.
fn logging_tool(name: &str) -> String {
  format!("#!/bin/sh\necho \"{} $*\" >> \"$FAKE_LOG\"\nexit \"${{FAKE_TOOL_EXIT:-0}}\"\n", name)
}

/// Isolated test environment.
///
/// `work/` is the current directory for `rod`, `home/` stands in for the home
/// directory, and `bin/` holds the stand-in tools.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    for dir in ["work", "home", "bin"] {
      std::fs::create_dir_all(temp.path().join(dir)).unwrap();
    }
    let env = Self { temp };
    env.write_tool("nim", FAKE_COMPILER);
    for tool in ["strip", "upx", "nimble", "editor"] {
      env.write_tool(tool, &logging_tool(tool));
    }
    env
  }

  pub fn work_path(&self) -> PathBuf {
    self.temp.path().join("work")
  }

  pub fn home_path(&self) -> PathBuf {
    self.temp.path().join("home")
  }

  fn tool_path(&self, name: &str) -> PathBuf {
    self.temp.path().join("bin").join(name)
  }

  fn write_tool(&self, name: &str, body: &str) {
    let path = self.tool_path(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  }

  /// Write a file relative to the working directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.work_path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn read_file(&self, relative_path: &str) -> String {
    std::fs::read_to_string(self.work_path().join(relative_path)).unwrap()
  }

  pub fn exists(&self, relative_path: &str) -> bool {
    self.work_path().join(relative_path).exists()
  }

  /// Lines the stand-in tools logged, in call order.
  pub fn tool_log(&self) -> Vec<String> {
    std::fs::read_to_string(self.temp.path().join("tools.log"))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Get a pre-configured Command for the rod binary.
  ///
  /// The home and config directories point into the temp dir and every
  /// external program is replaced by a stand-in.
  pub fn rod_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("rod");
    cmd.current_dir(self.work_path());
    cmd.env("HOME", self.home_path());
    cmd.env("XDG_CONFIG_HOME", self.home_path().join(".config"));
    cmd.env("FAKE_LOG", self.temp.path().join("tools.log"));
    cmd.env("ROD_COMPILER", self.tool_path("nim"));
    cmd.env("ROD_STRIP", self.tool_path("strip"));
    cmd.env("ROD_PACKER", self.tool_path("upx"));
    cmd.env("ROD_INSTALLER", self.tool_path("nimble"));
    cmd.env("ROD_EDITOR", self.tool_path("editor"));
    for var in [
      "ROD_HELPER_LIBRARY",
      "ROD_SNIPPET_FILE",
      "ROD_KEEP_GOING",
      "FAKE_NIM_EXIT",
      "FAKE_RUN_EXIT",
      "FAKE_TOOL_EXIT",
      "RUST_LOG",
    ] {
      cmd.env_remove(var);
    }
    cmd
  }
}
