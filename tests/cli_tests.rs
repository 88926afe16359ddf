use std::fs;
use std::process::{Command, Output};

fn run(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cleantime"));
    for var in [
        "CLEANTIME_DATE",
        "CLEANTIME_LANG",
        "CLEANTIME_LAYOUT",
        "CLEANTIME_SPECIAL_TAGS",
        "CLEANTIME_THEME",
        "CLEANTIME_IMAGE_ROOT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.args(args).envs(envs.iter().copied());
    cmd.output().expect("run cleantime")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_days_and_keytags() {
    let output = run(&["2023-01-31", "--today", "2023-03-01"], &[]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("You have been clean for 29 days!"), "stdout: {out}");
    assert!(out.contains("Keytags: white\n"), "stdout: {out}");
}

#[test]
fn prints_main_blurb_past_ninety_days() {
    let output = run(&["2022-11-20", "--today", "2024-01-05"], &[]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("This is 1 years, 1 month and 15 days."), "stdout: {out}");
    assert!(
        out.contains("Keytags: white, orange, green, red, 6-month, 9-month, 1-year"),
        "stdout: {out}"
    );
}

#[test]
fn json_report() {
    let output = run(&["2020-02-29", "--today", "2021-03-01", "--json"], &[]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["valid"], true);
    assert_eq!(json["span"]["totalDays"], 366);
    assert_eq!(json["span"]["years"], 1);
    assert_eq!(json["span"]["months"], 0);
    assert_eq!(json["span"]["days"], 1);
    assert_eq!(json["totalMonths"], 12);
    assert_eq!(json["keytags"].as_array().map(Vec::len), Some(7));
}

#[test]
fn impossible_date_asks_for_a_valid_one() {
    let output = run(&["2023-02-30", "--today", "2024-01-01"], &[]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Please select a valid cleandate!"), "stdout: {out}");
    assert!(!out.contains("Keytags"), "stdout: {out}");
}

#[test]
fn future_date_asks_for_a_valid_one() {
    let output = run(&["2030-01-01", "--today", "2024-01-01"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Please select a valid cleandate!"));
}

#[test]
fn malformed_date_fails() {
    let output = run(&["01/02/2020"], &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid date format"), "stderr: {stderr}");
}

#[test]
fn unknown_layout_fails() {
    let output = run(&["2020-01-01", "--layout", "grid"], &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown keytag layout"), "stderr: {stderr}");
}

#[test]
fn special_tags_from_environment() {
    let args = ["1990-01-01", "--today", "2024-06-01"];

    let plain = stdout(&run(&args, &[]));
    assert!(!plain.contains("decade"), "stdout: {plain}");

    let special = stdout(&run(&args, &[("CLEANTIME_SPECIAL_TAGS", "true")]));
    assert!(special.contains("decade"), "stdout: {special}");
    assert!(special.contains("25-year"), "stdout: {special}");
    assert!(special.contains("10000-day"), "stdout: {special}");

    let numeric = run(&args, &[("CLEANTIME_SPECIAL_TAGS", "1")]);
    assert!(numeric.status.success());
    assert!(stdout(&numeric).contains("decade"));

    let off = run(&args, &[("CLEANTIME_SPECIAL_TAGS", "0")]);
    assert!(off.status.success());
    assert!(!stdout(&off).contains("decade"));
}

#[test]
fn date_from_environment() {
    let output = run(&["--today", "2024-01-02"], &[("CLEANTIME_DATE", "2024-01-01")]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("You have been clean for 1 day!"));
}

#[test]
fn writes_svg() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cleantime.svg");

    let output = run(
        &[
            "2020-01-01",
            "--today",
            "2024-06-01",
            "--layout",
            "tabular",
            "--theme",
            "light",
            "--image-root",
            "static",
            "--svg",
            path.to_str().expect("utf-8 path"),
        ],
        &[],
    );
    assert!(output.status.success());

    let svg = fs::read_to_string(&path).expect("svg written");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("#ffffff"));
    assert!(svg.contains("static/images/en/01_Front.png"));
}
