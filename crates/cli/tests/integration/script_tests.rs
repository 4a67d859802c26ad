//! Script mode (`rod s`) integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn script_runs_and_deletes_executable() {
  let env = TestEnv::new();
  env.write_file("hello.nim", "echo 1");

  env
    .rod_cmd()
    .args(["s", "hello.nim", "a", "b"])
    .assert()
    .success()
    .stdout(predicate::str::contains("ran with: a b"));

  assert!(!env.exists("hello"));
  assert!(env.exists("hello.nim"));
  assert_eq!(env.tool_log(), vec!["nim --hints:off --verbosity:0 c hello.nim"]);
}

#[test]
fn script_deletes_executable_when_program_fails() {
  let env = TestEnv::new();

  env.rod_cmd().args(["s", "hello.nim"]).env("FAKE_RUN_EXIT", "9").assert().code(9);

  assert!(!env.exists("hello"));
}

#[test]
fn script_compile_failure_returns_compiler_code() {
  let env = TestEnv::new();

  env.rod_cmd().args(["s", "hello.nim"]).env("FAKE_NIM_EXIT", "2").assert().code(2);

  assert!(!env.exists("hello"));
}

#[test]
fn script_rejects_non_nim_file() {
  let env = TestEnv::new();
  env.write_file("hello.py", "print(1)");

  env
    .rod_cmd()
    .args(["s", "hello.py"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("provide a source file"));

  assert!(env.tool_log().is_empty());
  assert!(env.exists("hello.py"));
}

#[test]
fn script_with_space_in_name_runs_and_cleans_up() {
  let env = TestEnv::new();
  env.write_file("my demo.nim", "echo 1");

  env
    .rod_cmd()
    .args(["s", "my demo.nim", "a"])
    .assert()
    .success()
    .stdout(predicate::str::contains("ran with: a"));

  assert!(!env.exists("my demo"));
  assert!(env.exists("my demo.nim"));
}
