//! The option table printed by a bare `rod`.

const TABLE: &str = "\
option            what it does                          notes
------            ------------                          -----
init              bundles the indented 3 steps below    initialize a project folder
  alap            create alap.nim                       create a skeleton source file
  pykot           copy pykot.nim .                      copy pykot.nim to the current dir.
  nimble          simplified nimble init                create a simple .nimble file
ad                edit .nimble                          add dependency
id                nimble install -d                     install dependencies (and nothing else)
                                                        (like `pip install -r requirements.txt`)
c                 nim c                                 compile (debug)
cr                nim c -r                              compile and run
s                                                       compile, run, then delete the exe
                                                        i.e., run it as if it were a script
rel               nim c -d:release                      compile (release)
small1            nim c -d:release --opt:size           small EXE
small2            small1 + strip                        smaller EXE
small3            small2 + upx                          smallest EXE
ver               nim --version                         version info";

pub fn usage_text() -> String {
  let title = format!("Nim CLI Helper v{}", env!("CARGO_PKG_VERSION"));
  format!("{}\n{}\n{}", title, "=".repeat(title.chars().count()), TABLE)
}

pub fn cmd_usage() {
  println!("{}", usage_text());
}
