use std::path::PathBuf;
use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("HYLTL_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

const HD: &str = env!("CARGO_BIN_EXE_hd_gen");
const OD: &str = env!("CARGO_BIN_EXE_od_gen");
const QN: &str = env!("CARGO_BIN_EXE_qn_gen");

fn preset_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hyltl-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn hd_gen_go_style_flags() {
    let output = run(HD, &["-d", "1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "forall x0. forall x1. (F((!(in0_x0 <-> in0_x1))) -> !((((out0_x0 <-> out0_x1)) W ((!(out0_x0 <-> out0_x1)) & X(False)))))"
    );
}

#[test]
fn hd_gen_defaults_to_zero_window() {
    let output = run(HD, &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "forall x0. forall x1. (F((!(in0_x0 <-> in0_x1))) -> !(False))"
    );
}

#[test]
fn hd_gen_rejects_negative_window() {
    let output = run(HD, &["-d", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("error:"));
}

#[test]
fn hd_gen_deep_window() {
    let output = run(HD, &["-d", "100000"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).matches("X(").count(), 100_000);
}

#[test]
fn od_gen_implication() {
    let output = run(OD, &["-t", "2"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "forall x0. forall x1. ((in0_x0 <-> in0_x1))=>G((out0_x0 <-> out0_x1))"
    );
}

#[test]
fn od_gen_global_wraps_implication() {
    let global = run(OD, &["-t", "1"]);
    let implication = run(OD, &["-t", "2"]);
    let prefix = "forall x0. forall x1. ";
    let body = stdout(&implication).strip_prefix(prefix).unwrap();
    assert_eq!(stdout(&global), format!("{prefix}G({body})"));
    assert_eq!(stdout(&run(OD, &[])), stdout(&global));
}

#[test]
fn od_gen_rejects_unknown_type() {
    for t in ["0", "4", "-2"] {
        let output = run(OD, &["-t", t]);
        assert_eq!(output.status.code(), Some(1), "t = {t}");
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains(t));
    }
}

#[test]
fn od_gen_rejects_negative_counts() {
    let help = run(OD, &["--help"]);
    assert!(help.status.success());
    assert!(stdout(&help).contains("non-negative"));

    for flag in ["-in", "-out"] {
        let output = run(OD, &[flag, "-1"]);
        assert_eq!(output.status.code(), Some(2), "{flag}");
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("-1"));
    }
}

#[test]
fn qn_gen_two_traces() {
    let output = run(QN, &["-c", "1"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "forall x0. forall x1. !((G((in0_x0 <-> in0_x0)) & G((in0_x1 <-> in0_x0)) & F(!(out0_x0 <-> out0_x1)) & F(!(out0_x1 <-> out0_x0))))"
    );
}

#[test]
fn double_dash_flags_and_newline() {
    let output = run(HD, &["--pi", "t", "--in", "2", "--out", "0", "--d", "0", "--newline"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.ends_with('\n'));
    assert!(text.starts_with("forall t0. forall t1. (F((!(in0_t0 <-> in0_t1) | !(in1_t0 <-> in1_t1)))"));
}

#[test]
fn preset_supplies_missing_flags() {
    let path = preset_file("od.toml", "pi = \"y\"\n[od]\nt = 2\n");
    let output = run(OD, &["--preset", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "forall y0. forall y1. ((in0_y0 <-> in0_y1))=>G((out0_y0 <-> out0_y1))"
    );

    let output = run(OD, &["--preset", path.to_str().unwrap(), "-pi", "z"]);
    assert!(stdout(&output).starts_with("forall z0. forall z1. ((in0_z0"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn broken_preset_is_reported() {
    let path = preset_file("broken.toml", "[hd]\nwindow = 2\n");
    let output = run(HD, &["--preset", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("broken.toml"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn color_always_emits_escape_codes() {
    let output = run(QN, &["-c", "0", "--color", "always"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains('\u{1b}'));
}
