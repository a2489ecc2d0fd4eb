//! End-to-end checks of the `name-conversion` binary.

use std::io::Write;
use std::process::Command;

fn name_conversion() -> Command {
    Command::new(env!("CARGO_BIN_EXE_name-conversion"))
}

#[test]
fn emits_directives_in_file_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "entity top is\n  port (\n    CLK_I : in std_logic;\n    RESET : out std_logic\n  );\nend;\n\
         architecture rtl of top is\n  signal my_Counter : integer;\n  signal my_Counter : integer;\nbegin\nend;\n"
    )
    .unwrap();

    let output = name_conversion().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "s/CLK_I/i_clk/g\ns/RESET/o_reset/g\ns/my_Counter/n_my_counter/g\ns/my_Counter/n_my_counter/g\n"
    );
}

#[test]
fn no_matches_is_success() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "-- nothing to rename here").unwrap();

    let output = name_conversion().arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_fails_without_output() {
    let output = name_conversion()
        .arg("/nonexistent/dir/top.vhd")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: cannot read '/nonexistent/dir/top.vhd'"));
}

#[test]
fn missing_argument_is_usage_error() {
    let output = name_conversion().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
