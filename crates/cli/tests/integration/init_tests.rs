//! Scaffolding and manifest editing integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

const SNIPPET: &str = r#"{
  "alap": {
    "prefix": "alap",
    "body": ["import os", "", "proc main() =", "  $0echo 1", "", "main()"]
  }
}"#;

#[test]
fn alap_uses_snippet_body() {
  let env = TestEnv::new();
  let snippet = env.home_path().join("nim.json");
  std::fs::write(&snippet, SNIPPET).unwrap();

  env
    .rod_cmd()
    .arg("alap")
    .env("ROD_SNIPPET_FILE", &snippet)
    .assert()
    .success()
    .stdout(predicate::str::contains("using your VS Code Nim snippet"));

  assert_eq!(
    env.read_file("alap.nim"),
    "import os\n\nproc main() =\n  echo 1\n\nmain()\n"
  );
}

#[test]
fn alap_twice_keeps_existing_file() {
  let env = TestEnv::new();

  env.rod_cmd().arg("alap").assert().success();
  env.write_file("alap.nim", "edited");

  env
    .rod_cmd()
    .arg("alap")
    .assert()
    .success()
    .stderr(predicate::str::contains("already exists"));

  assert_eq!(env.read_file("alap.nim"), "edited");
}

#[test]
fn pykot_replaces_previous_copy() {
  let env = TestEnv::new();
  let helper = env.home_path().join("pykot.nim");
  std::fs::write(&helper, "proc latest() = discard\n").unwrap();
  env.write_file("pykot.nim", "old");

  env
    .rod_cmd()
    .arg("pykot")
    .env("ROD_HELPER_LIBRARY", &helper)
    .assert()
    .success()
    .stdout(predicate::str::contains("deleting it"));

  assert_eq!(env.read_file("pykot.nim"), "proc latest() = discard\n");
}

#[test]
fn pykot_without_library_warns() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .arg("pykot")
    .env("ROD_HELPER_LIBRARY", env.home_path().join("missing.nim"))
    .assert()
    .success()
    .stderr(predicate::str::contains("helper library not found"));

  assert!(!env.exists("pykot.nim"));
}

#[test]
fn init_creates_what_it_can() {
  let env = TestEnv::new();
  let helper = env.home_path().join("pykot.nim");
  std::fs::write(&helper, "# helper\n").unwrap();
  env.write_file("alap.nimble", "mine");

  env.rod_cmd().arg("init").env("ROD_HELPER_LIBRARY", &helper).assert().success();

  assert!(env.exists("alap.nim"));
  assert!(env.exists("pykot.nim"));
  assert_eq!(env.read_file("alap.nimble"), "mine");
}

#[test]
fn nimble_writes_manifest_template() {
  let env = TestEnv::new();

  env.rod_cmd().arg("nimble").assert().success();

  let manifest = env.read_file("alap.nimble");
  assert!(manifest.contains("requires \"nim >= "));
}

#[test]
fn ad_opens_single_manifest() {
  let env = TestEnv::new();
  env.write_file("project.nimble", "");

  env.rod_cmd().arg("ad").assert().success();

  assert_eq!(env.tool_log(), vec!["editor project.nimble"]);
}

#[test]
fn ad_with_two_manifests_opens_nothing() {
  let env = TestEnv::new();
  env.write_file("a.nimble", "");
  env.write_file("b.nimble", "");

  env
    .rod_cmd()
    .arg("ad")
    .assert()
    .success()
    .stderr(predicate::str::contains("expected exactly one"));

  assert!(env.tool_log().is_empty());
}

#[test]
fn ad_without_manifest_opens_nothing() {
  let env = TestEnv::new();

  env
    .rod_cmd()
    .arg("ad")
    .assert()
    .success()
    .stderr(predicate::str::contains("no .nimble file"));

  assert!(env.tool_log().is_empty());
}
