use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tgwire-cli"))
}

fn input_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", contents)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    cli().arg("--help").assert().success();
    Ok(())
}

#[test]
fn list_prints_catalog() -> Result<(), Box<dyn std::error::Error>> {
    cli()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("InlineKeyboardButton\n"))
        .stdout(predicate::str::contains("ChatMember\n"));
    Ok(())
}

#[test]
fn normalizes_update_and_drops_nulls() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file(
        r#"{"update_id": 7, "message": {"message_id": 1, "date": 2, "edit_date": null,
            "chat": {"id": 3, "type": "private", "title": null}}}"#,
    )?;
    let output = cli().arg(tmp.path()).output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(
        out.trim_end(),
        r#"{"update_id":7,"message":{"message_id":1,"date":2,"chat":{"id":3,"type":"private"}}}"#
    );
    Ok(())
}

#[test]
fn reads_stdin_with_explicit_type() -> Result<(), Box<dyn std::error::Error>> {
    let output = cli()
        .args(["--type", "chatpermissions"])
        .write_stdin(r#"{"can_send_polls": false}"#)
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v, serde_json::json!({"can_send_polls": false}));
    Ok(())
}

#[test]
fn strict_rejects_actionless_button() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file(r#"{"text": "bare"}"#)?;
    cli()
        .args(["--type", "InlineKeyboardButton"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one of"));

    cli()
        .args(["--type", "InlineKeyboardButton", "--validation", "off"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"text":"bare"}"#));
    Ok(())
}

#[test]
fn unknown_field_policies() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file(r#"{"id": 1, "type": "group", "colour": "blue"}"#)?;
    cli()
        .args(["--type", "Chat"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"));

    cli()
        .args(["--type", "Chat", "--unknown-fields", "warn"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"id":1,"type":"group"}"#))
        .stderr(predicate::str::contains("ignoring unknown field"));
    Ok(())
}

#[test]
fn unknown_record_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    cli()
        .args(["--type", "Sticker2"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown record type"));
    Ok(())
}

#[test]
fn pretty_output_is_indented() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = input_file(r#"{"message_id": 9}"#)?;
    cli()
        .args(["--type", "MessageId", "--pretty"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n  \"message_id\": 9\n}"));
    Ok(())
}
