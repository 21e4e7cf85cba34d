use std::error::Error;
use std::io::Write;
use std::time::Duration;

use tasker::config::{load_and_validate, parse_interval};
use tasker::errors::TaskerError;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn parses_full_task_list_in_order() -> TestResult {
    let file = write_config(
        r#"
[[task]]
name = "heartbeat"
command = "curl -s https://example.com/ping"
interval = "30s"

[[task]]
name = "warmup"
command = "./scripts/warm-cache.sh"
interval = "2s"
quantity = 3
"#,
    )?;

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.tasks.len(), 2);
    assert_eq!(cfg.tasks[0].name, "heartbeat");
    assert_eq!(cfg.tasks[0].interval()?, Duration::from_secs(30));
    assert_eq!(cfg.tasks[0].quantity(), 0);
    assert_eq!(cfg.tasks[1].name, "warmup");
    assert_eq!(cfg.tasks[1].quantity(), 3);

    Ok(())
}

#[test]
fn interval_and_quantity_default_to_zero() -> TestResult {
    let file = write_config(
        r#"
[[task]]
name = "tick"
command = "date"
"#,
    )?;

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.tasks[0].interval()?, Duration::ZERO);
    assert_eq!(cfg.tasks[0].quantity(), 0);

    Ok(())
}

#[test]
fn empty_task_list_is_a_config_error() -> TestResult {
    let file = write_config("")?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskerError::Config(_)), "got: {err:?}");

    Ok(())
}

#[test]
fn duplicate_names_are_rejected() -> TestResult {
    let file = write_config(
        r#"
[[task]]
name = "tick"
command = "date"

[[task]]
name = "tick"
command = "uptime"
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskerError::Config(_)), "got: {err:?}");

    Ok(())
}

#[test]
fn empty_command_is_rejected() -> TestResult {
    let file = write_config(
        r#"
[[task]]
name = "tick"
command = "  "
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskerError::Config(_)), "got: {err:?}");

    Ok(())
}

#[test]
fn bad_interval_fails_validation_before_spawn() -> TestResult {
    let file = write_config(
        r#"
[[task]]
name = "tick"
command = "date"
interval = "5 fortnights"
"#,
    )?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, TaskerError::Config(_)), "got: {err:?}");

    Ok(())
}

#[test]
fn missing_config_file_is_a_config_error() -> TestResult {
    let err = load_and_validate("definitely/not/here/Tasker.toml").unwrap_err();
    assert!(matches!(err, TaskerError::Config(_)), "got: {err:?}");

    Ok(())
}

#[test]
fn interval_strings_cover_all_units() -> TestResult {
    assert_eq!(parse_interval("250ms")?, Duration::from_millis(250));
    assert_eq!(parse_interval("3s")?, Duration::from_secs(3));
    assert_eq!(parse_interval("1m")?, Duration::from_secs(60));
    assert_eq!(parse_interval("2h")?, Duration::from_secs(7200));
    // Bare numbers mean seconds.
    assert_eq!(parse_interval("5")?, Duration::from_secs(5));
    assert_eq!(parse_interval("0")?, Duration::ZERO);

    assert!(parse_interval("").is_err());
    assert!(parse_interval("ms").is_err());
    assert!(parse_interval("10y").is_err());

    Ok(())
}
