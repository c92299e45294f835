use std::io::Write as _;
use std::process::{Command, Output, Stdio};

fn run_tripform(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tripform"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tripform");

    child
        .stdin
        .take()
        .expect("tripform stdin")
        .write_all(input.as_bytes())
        .expect("write tripform stdin");

    child.wait_with_output().expect("run tripform")
}

fn stdout_of(output: &Output) -> String {
    assert!(output.status.success(), "process failed: {output:?}");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn initial_cost_is_printed_before_any_event() {
    let output = run_tripform(&["--price", "2.50", "--consumed", "10"], "");
    let stdout = stdout_of(&output);
    assert!(
        stdout.starts_with("tripCost = 25.00"),
        "expected initial cost first, got: {stdout}"
    );
}

#[test]
fn price_change_reprints_cost() {
    let output = run_tripform(&["--consumed", "3"], "price 3.333\nquit\n");
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("tripCost = 10.00"),
        "expected rounded cost in: {stdout}"
    );
}

#[test]
fn garbage_price_displays_nan() {
    let output = run_tripform(&["--consumed", "10"], "price abc\n");
    let stdout = stdout_of(&output);
    assert!(stdout.contains("tripCost = NaN"), "expected NaN in: {stdout}");
}

#[test]
fn rejected_file_alerts_and_clears() {
    let output = run_tripform(&[], "file report.CSV\nshow\n");
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("alert: Please upload CSV files only!"),
        "expected alert in: {stdout}"
    );
    // `show` prints the cleared control.
    assert!(
        stdout.contains("file = \n"),
        "expected cleared file value in: {stdout}"
    );
}

#[test]
fn accepted_file_is_kept() {
    let output = run_tripform(&[], "file trip.csv\nshow\n");
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("alert:"), "unexpected alert in: {stdout}");
    assert!(
        stdout.contains("file = trip.csv"),
        "expected kept file value in: {stdout}"
    );
}

#[test]
fn consumed_edit_is_stale_until_next_price_change() {
    let output = run_tripform(
        &["--price", "2.00", "--consumed", "10"],
        "consumed 5\nshow\nprice 2.00\n",
    );
    let stdout = stdout_of(&output);
    // `show` after the edit still reports the stale cost.
    assert!(
        stdout.contains("fuelConsumed = 5\ntripCost = 20.00"),
        "expected stale cost in: {stdout}"
    );
    assert!(
        stdout.ends_with("tripCost = 10.00\n"),
        "expected refreshed cost last, got: {stdout}"
    );
}

#[test]
fn unknown_command_warns_and_continues() {
    let output = run_tripform(&["--price", "1", "--consumed", "1"], "frobnicate\nprice 2\n");
    let stdout = stdout_of(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown command"),
        "expected warning on stderr, got: {stderr}"
    );
    assert!(
        stdout.contains("tripCost = 2.00"),
        "expected loop to continue in: {stdout}"
    );
}
