use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_magic-semvar"))
        .args(args)
        .env_remove("MAGIC_SEMVAR_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn compare_prints_ordering() {
    let output = run(&["compare", "1.0.1b", "1.0.10-alpha.beta"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.0.1b < 1.0.10-alpha.beta\n");
}

#[test]
fn compare_json_output() {
    let output = run(&["compare", "--json", "1.0.0", "1.0.0-rc.1"], None);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "left": "1.0.0", "right": "1.0.0-rc.1", "ordering": ">" })
    );
}

#[test]
fn compare_fails_on_invalid_version() {
    let output = run(&["compare", "1.0", "1.0.0"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid version '1.0'"));
}

#[test]
fn sort_reads_stdin_and_skips_invalid() {
    let output = run(&["sort"], Some("1.0.0\nbogus\n\n1.0.0-alpha\n0.1.0\n"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0.1.0\n1.0.0-alpha\n1.0.0\n");
}

#[test]
fn sort_reverse_dedup() {
    let output = run(
        &["sort", "--reverse", "--dedup", "1.0.1b", "1.0.0", "1.0.1"],
        None,
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.0.1b\n1.0.0\n");
}

#[test]
fn sort_strict_rejects_invalid() {
    let output = run(&["sort", "--strict", "1.0.0", "1.x.0"], None);
    assert!(!output.status.success());
}

#[test]
fn latest_ignores_prereleases_unless_asked() {
    let output = run(&["latest", "1.0.0", "1.1.0-rc.1"], None);
    assert_eq!(stdout(&output), "1.0.0\n");

    let output = run(&["latest", "--pre", "1.0.0", "1.1.0-rc.1"], None);
    assert_eq!(stdout(&output), "1.1.0-rc.1\n");
}

#[test]
fn check_passes() {
    let output = run(&["check"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ok: 6 pairs\n");
}
