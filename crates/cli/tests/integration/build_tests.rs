//! Build verb integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn compile_echoes_and_builds() {
  let env = TestEnv::new();
  env.write_file("demo.nim", "echo 1");

  env
    .rod_cmd()
    .args(["c", "demo.nim"])
    .assert()
    .success()
    .stderr(predicate::str::contains("# ").and(predicate::str::contains(" c demo.nim")));

  assert!(env.exists("demo"));
  assert_eq!(env.tool_log(), vec!["nim c demo.nim"]);
}

#[test]
fn quiet_flag_suppresses_echo() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["--quiet", "c", "demo.nim"])
    .assert()
    .success()
    .stderr(predicate::str::contains("# ").not());
}

#[test]
fn compile_failure_code_passes_through() {
  let env = TestEnv::new();

  env.rod_cmd().args(["rel", "demo.nim"]).env("FAKE_NIM_EXIT", "3").assert().code(3);

  assert_eq!(env.tool_log(), vec!["nim c -d:release demo.nim"]);
}

#[test]
fn small3_runs_compile_strip_pack() {
  let env = TestEnv::new();

  env.rod_cmd().args(["small3", "demo.nim"]).assert().success();

  assert_eq!(
    env.tool_log(),
    vec!["nim c -d:release --opt:size demo.nim", "strip demo", "upx demo"]
  );
}

#[test]
fn small2_stops_after_failed_compile() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["small2", "demo.nim"])
    .env("FAKE_NIM_EXIT", "1")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("skipped strip"));

  assert_eq!(env.tool_log().len(), 1);
}

#[test]
fn keep_going_runs_the_whole_chain() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["--keep-going", "small3", "demo.nim"])
    .env("FAKE_NIM_EXIT", "1")
    .assert()
    .code(1);

  assert_eq!(env.tool_log().len(), 3);
}

#[test]
fn compile_run_forwards_arguments() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["cr", "demo.nim", "--flag", "two words"])
    .env("FAKE_RUN_EXIT", "4")
    .assert()
    .code(4)
    .stdout(predicate::str::contains("ran with: --flag two words"));

  assert!(env.exists("demo"));
}

#[test]
fn missing_compiler_exits_127() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["c", "demo.nim"])
    .env("ROD_COMPILER", "rod-test-no-such-compiler")
    .assert()
    .code(127)
    .stderr(predicate::str::contains("rod-test-no-such-compiler not found"));
}

#[test]
fn ver_prints_and_writes_first_line() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["ver", "--output", "version.txt"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nim Compiler Version 2.2.0"))
    .stdout(predicate::str::contains("Copyright").not());

  assert_eq!(env.read_file("version.txt"), "Nim Compiler Version 2.2.0 [Linux: amd64]\n");
}

#[test]
fn install_dependencies_runs_installer() {
  let env = TestEnv::new();

  env.rod_cmd().arg("id").env("FAKE_TOOL_EXIT", "6").assert().code(6);

  assert_eq!(env.tool_log(), vec!["nimble install -d"]);
}

#[test]
fn compile_run_forwards_help_flag_to_program() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .args(["cr", "demo.nim", "-h"])
    .assert()
    .success()
    .stdout(predicate::str::contains("ran with: -h"));

  assert_eq!(env.tool_log(), vec!["nim c demo.nim"]);
}
