use assert_cmd::Command;
use predicates::prelude::*;

fn uniprint() -> Command {
    let mut cmd = Command::cargo_bin("uniprint").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_raw_ascii() {
    uniprint().arg("0041").assert().success().stdout("A");
}

#[test]
fn test_raw_forms() {
    for arg in ["U+0041", "u+0041", "0x41", "65"] {
        uniprint().arg(arg).assert().success().stdout("A");
    }
    uniprint().arg("41").assert().success().stdout(")");
}

#[test]
fn test_raw_four_bytes() {
    uniprint()
        .arg("1F512")
        .assert()
        .success()
        .stdout(predicate::eq(&[0xF0u8, 0x9F, 0x94, 0x92] as &[u8]));
}

#[test]
fn test_raw_max() {
    uniprint()
        .arg("10FFFF")
        .assert()
        .success()
        .stdout(predicate::eq(&[0xF4u8, 0x8F, 0xBF, 0xBF] as &[u8]));
}

#[test]
fn test_hex_output() {
    uniprint()
        .args(["-o", "hex", "U+20AC"])
        .assert()
        .success()
        .stdout("E2 82 AC\n");
}

#[test]
fn test_uplus_output() {
    uniprint()
        .args(["--output", "uplus", "1F512"])
        .assert()
        .success()
        .stdout("U+01F512\n");
}

#[test]
fn test_json_output() {
    uniprint()
        .args(["-o", "json", "0x1F512"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""codepoint": "U+01F512""#))
        .stdout(predicate::str::contains(r#""value": 128274"#))
        .stdout(predicate::str::contains(r#""form": "hex-prefix""#))
        .stdout(predicate::str::contains(r#""utf8": "F0 9F 94 92""#));
}

#[test]
fn test_invalid_codepoint() {
    for arg in ["D800", "110000", "12G3", "U+"] {
        uniprint()
            .arg(arg)
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::starts_with(format!(
                "uniprint: invalid codepoint '{arg}'"
            )));
    }
}

#[test]
fn test_invalid_codepoint_reason() {
    uniprint()
        .arg("U+D800")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("U+D800 is not a Unicode scalar value"));
}

#[test]
fn test_usage_errors() {
    uniprint().assert().code(2).stdout("");
    uniprint().args(["0041", "0042"]).assert().code(2).stdout("");
    uniprint().args(["-o", "bogus", "0041"]).assert().code(2);
}

#[test]
fn test_help() {
    uniprint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CODEPOINT FORMAT:"))
        .stdout(predicate::str::contains("EXIT STATUS:"));
    uniprint()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: uniprint"));
}
