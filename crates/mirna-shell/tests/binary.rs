//! Integration tests running the `mirna-query` binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use mirna_types::well_known::PROMPT;

fn run_binary(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mirna-query"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The process may exit before reading stdin when a table is missing.
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    child.wait_with_output().unwrap()
}

fn dir_arg(dir: &Path) -> String {
    dir.to_str().unwrap().to_string()
}

#[test]
fn test_binary_quit_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("mirMap.txt"), "MIR1\tGENE1\n").unwrap();
    fs::write(dir.path().join("geneMap.txt"), "GENE1\tMIR1\tMIR2\n").unwrap();

    let output = run_binary(&["-d", &dir_arg(dir.path())], "gene1\nquit\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{PROMPT}\nMIR1\tMIR2\n{PROMPT}\n")
    );
}

#[test]
fn test_binary_missing_gene_map_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("mirMap.txt"), "MIR1\tGENE1\n").unwrap();

    let output = run_binary(&["-d", &dir_arg(dir.path())], "gene1\nquit\n");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("FILE NOT FOUND"));
    assert!(stderr.contains("geneMap.txt"));
}

#[test]
fn test_binary_missing_data_dir_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let output = run_binary(&["-d", &dir_arg(&missing)], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("FILE NOT FOUND"));
    assert!(stderr.contains("mirMap.txt"));
}
