use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn corpus() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("corpus");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("company.txt"), "Mr. Smith founded the company in 1990. Dr. Jones joined later.").unwrap();
    fs::write(dir.join("garden.txt"), "Tomatoes need sun. Basil grows fast.").unwrap();
    tmp
}

fn run(cwd: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_docqa"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn docqa");
    // The process may exit before reading its input.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait docqa")
}

#[test]
fn prints_the_best_sentence() {
    let tmp = corpus();
    let out = run(tmp.path(), &["corpus"], "Who founded the company?\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "Query: Mr. Smith founded the company in 1990.\n");
}

#[test]
fn stopword_only_query_prints_nothing() {
    let tmp = corpus();
    let out = run(tmp.path(), &["corpus"], "the\n");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Query: ");
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    let tmp = corpus();
    for args in [&[][..], &["corpus", "extra"][..]] {
        let out = run(tmp.path(), args, "");
        assert_eq!(out.status.code(), Some(1));
        assert_eq!(String::from_utf8(out.stderr).unwrap(), "Usage: docqa corpus\n");
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn missing_corpus_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["nowhere"], "anything\n");
    assert!(!out.status.success());
}
