use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn parse_json_payload() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("lifelink")?
        .args([
            "qr",
            "parse",
            r#"{"uid":"d4f0c2aa-1111-2222-3333-444455556666","name":"Amal"}"#,
        ])
        .assert()
        .success()
        .stdout(contains("\"uid\":\"d4f0c2aa-1111-2222-3333-444455556666\""))
        .stdout(contains("\"name\":\"Amal\""));
    Ok(())
}

#[test]
fn parse_legacy_bare_uid() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("lifelink")?
        .args(["qr", "parse", "d4f0c2aa-1111-2222-3333-444455556666"])
        .assert()
        .success()
        .stdout(contains("\"uid\":\"d4f0c2aa-1111-2222-3333-444455556666\""));
    Ok(())
}

#[test]
fn short_junk_fails() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("lifelink")?
        .args(["qr", "parse", "hello"])
        .assert()
        .failure()
        .stderr(contains("unrecognized scan payload"));
    Ok(())
}
