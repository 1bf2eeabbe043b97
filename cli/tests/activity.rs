use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use predicates::str::is_empty;
use tempfile::tempdir;

fn lifelink(root: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("lifelink").unwrap();
    cmd.arg("--root").arg(root);
    cmd
}

#[test]
fn record_then_list_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    lifelink(dir.path())
        .args([
            "activity",
            "record-appointment",
            "--appointment-id",
            "apt1",
            "--date",
            "2025-07-01",
            "--location",
            "City Hospital",
        ])
        .assert()
        .success();

    lifelink(dir.path())
        .args(["activity", "list", "--kind", "appointment_created"])
        .assert()
        .success()
        .stdout(contains("\"appointmentId\":\"apt1\""))
        .stdout(contains("City Hospital"));

    // unrelated kind filter excludes it
    lifelink(dir.path())
        .args(["activity", "list", "--kind", "donation_completed"])
        .assert()
        .success()
        .stdout(is_empty());
    Ok(())
}

#[test]
fn search_and_user_filters_apply() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    lifelink(dir.path())
        .args([
            "activity",
            "record-joined",
            "--campaign-id",
            "c1",
            "--name",
            "Colombo Mega Drive",
            "--user",
            "u1",
        ])
        .assert()
        .success();
    lifelink(dir.path())
        .args([
            "activity",
            "record-joined",
            "--campaign-id",
            "c2",
            "--name",
            "Kandy Drive",
            "--user",
            "u2",
        ])
        .assert()
        .success();

    lifelink(dir.path())
        .args(["activity", "list", "--search", "colombo"])
        .assert()
        .success()
        .stdout(contains("Colombo Mega Drive"))
        .stdout(contains("Kandy Drive").not());

    lifelink(dir.path())
        .args(["activity", "list", "--user", "u2"])
        .assert()
        .success()
        .stdout(contains("Kandy Drive"))
        .stdout(contains("Colombo Mega Drive").not());
    Ok(())
}

#[test]
fn stats_and_clear() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    lifelink(dir.path())
        .args([
            "activity",
            "record-donation",
            "--location",
            "City Hospital",
            "--volume",
            "450",
        ])
        .assert()
        .success();

    lifelink(dir.path())
        .args(["activity", "stats"])
        .assert()
        .success()
        .stdout(contains("\"total\":1"))
        .stdout(contains("\"donation_completed\":1"));

    lifelink(dir.path())
        .args(["activity", "clear"])
        .assert()
        .success();

    lifelink(dir.path())
        .args(["activity", "list"])
        .assert()
        .success()
        .stdout(is_empty());
    Ok(())
}

#[test]
fn unknown_kind_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    lifelink(dir.path())
        .args(["activity", "list", "--kind", "blood_typed"])
        .assert()
        .failure()
        .stderr(contains("unknown activity kind"));
    Ok(())
}

#[test]
fn migrate_reports_record_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    lifelink(dir.path())
        .args([
            "activity",
            "record-campaign",
            "--campaign-id",
            "c1",
            "--name",
            "City Drive",
        ])
        .assert()
        .success();

    let data_dir = dir.path().join(".lifelink");
    let db = dir.path().join("activity.db");
    lifelink(dir.path())
        .args([
            "activity",
            "migrate",
            "--dir",
            data_dir.to_str().ok_or("path")?,
            "--db",
            db.to_str().ok_or("path")?,
        ])
        .assert()
        .success()
        .stdout(contains("Migrated 1 records"));
    assert!(db.exists());
    Ok(())
}
