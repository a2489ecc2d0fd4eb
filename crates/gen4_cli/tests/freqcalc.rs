//! End-to-end checks of the `freqcalc` binary.

use std::process::Command;

fn freqcalc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_freqcalc"))
}

#[test]
fn default_report_is_stable() {
    let first = freqcalc().output().unwrap();
    let second = freqcalc().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    assert!(text.starts_with("CLKI = 33.333333 MHz (33333333 Hz)\n"));
    assert!(text.contains("Ms counter = 1000 (actual = 999.99"));
}

#[test]
fn zero_divider_exits_with_error() {
    let output = freqcalc().args(["--input-div", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: input_div must be non-zero"));
}
