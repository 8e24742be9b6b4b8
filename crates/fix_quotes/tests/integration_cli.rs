use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const BROKEN: &str = "const a = 1;\nmsg = msg.replace(/'/g, '\u{2018}\u{2019}');\nconst b = 2;\n";
const FIXED: &str = "const a = 1;\nmsg = msg.replace(/'/g, ''');\nconst b = 2;\n";

#[test]
fn test_text_binary_fixes_file_in_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("dpd-api.js");
    fs::write(&target, BROKEN)?;

    let mut cmd = Command::cargo_bin("fix_quotes")?;
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd.assert().success().stdout("Fixed\n");

    assert_eq!(fs::read_to_string(&target)?, FIXED);
    Ok(())
}

#[test]
fn test_byte_binary_fixes_file_in_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("dpd-api.js");
    fs::write(&target, BROKEN.as_bytes())?;

    let mut cmd = Command::cargo_bin("fix_quotes_bytes")?;
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd.assert().success().stdout("Fixed\n");

    assert_eq!(fs::read(&target)?, FIXED.as_bytes());
    Ok(())
}

#[test]
fn test_second_run_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("dpd-api.js");
    fs::write(&target, BROKEN)?;

    Command::cargo_bin("fix_quotes")?
        .current_dir(dir.path())
        .assert()
        .success();
    Command::cargo_bin("fix_quotes")?
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Fixed\n")
        .stderr(predicate::str::contains("pattern not found"));

    assert_eq!(fs::read_to_string(&target)?, FIXED);
    Ok(())
}

#[test]
fn test_missing_target_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    for bin in ["fix_quotes", "fix_quotes_bytes"] {
        Command::cargo_bin(bin)?
            .current_dir(dir.path())
            .assert()
            .failure()
            .stdout(predicate::str::contains("Fixed").not())
            .stderr(predicate::str::contains("dpd-api.js"));
    }

    assert!(!dir.path().join("dpd-api.js").exists());
    Ok(())
}

#[test]
fn test_invalid_utf8_needs_byte_binary() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("dpd-api.js");
    let mut broken = vec![0xff, b'\n'];
    broken.extend_from_slice(BROKEN.as_bytes());
    fs::write(&target, &broken)?;

    Command::cargo_bin("fix_quotes")?
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
    assert_eq!(fs::read(&target)?, broken);

    Command::cargo_bin("fix_quotes_bytes")?
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Fixed\n");

    let mut expected = vec![0xff, b'\n'];
    expected.extend_from_slice(FIXED.as_bytes());
    assert_eq!(fs::read(&target)?, expected);
    Ok(())
}

#[test]
fn test_verbose_logs_replacement_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("dpd-api.js"), BROKEN)?;

    Command::cargo_bin("fix_quotes_bytes")?
        .arg("--verbose")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Fixed\n")
        .stderr(predicate::str::contains("1 occurrence(s)"))
        .stderr(predicate::str::contains("default log filter: debug"));
    Ok(())
}

#[test]
fn test_quiet_run_does_not_log_filter() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("dpd-api.js"), BROKEN)?;

    Command::cargo_bin("fix_quotes")?
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Fixed\n")
        .stderr(predicate::str::contains("default log filter").not());
    Ok(())
}
