use std::error::Error;
use std::fs;

use tasker::errors::TaskerError;
use tasker::state::{StateMap, StateStore, TaskRecord, TaskStatus};

type TestResult = Result<(), Box<dyn Error>>;

fn sample_state() -> StateMap {
    let mut state = StateMap::new();
    state.insert(
        "heartbeat".to_string(),
        TaskRecord {
            pid: 4242,
            command: "curl -s https://example.com/ping".to_string(),
            status: TaskStatus::Running,
        },
    );
    state.insert(
        "warmup".to_string(),
        TaskRecord {
            pid: 4243,
            command: "./scripts/warm-cache.sh".to_string(),
            status: TaskStatus::Stopped,
        },
    );
    state
}

#[test]
fn round_trip_preserves_all_records() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    let state = sample_state();
    store.save(&state)?;
    let reloaded = store.load()?;

    assert_eq!(reloaded, state);

    Ok(())
}

#[test]
fn missing_file_loads_as_empty_mapping() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    assert!(store.load()?.is_empty());

    Ok(())
}

#[test]
fn malformed_file_is_reported_as_corrupt_state() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");
    fs::write(&path, "{ this is not json")?;

    let store = StateStore::new(&path);
    let err = store.load().unwrap_err();

    assert!(matches!(err, TaskerError::CorruptState { .. }), "got: {err:?}");

    Ok(())
}

#[test]
fn save_replaces_previous_content_entirely() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    store.save(&sample_state())?;

    let mut smaller = StateMap::new();
    smaller.insert(
        "only".to_string(),
        TaskRecord {
            pid: 7,
            command: "true".to_string(),
            status: TaskStatus::Running,
        },
    );
    store.save(&smaller)?;

    let reloaded = store.load()?;
    assert_eq!(reloaded, smaller);

    Ok(())
}

#[test]
fn state_file_is_indented_for_human_inspection() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    store.save(&sample_state())?;
    let raw = fs::read_to_string(store.path())?;

    assert!(raw.contains('\n'), "expected pretty-printed JSON, got: {raw}");
    assert!(raw.contains("\"status\": \"running\""));
    assert!(raw.contains("\"status\": \"stopped\""));

    Ok(())
}

#[test]
fn save_creates_parent_directory_on_demand() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join(".tasker").join("state.json"));

    store.save(&sample_state())?;
    assert!(store.path().exists());

    Ok(())
}

#[test]
fn delete_is_idempotent() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    store.save(&sample_state())?;
    store.delete()?;
    assert!(!store.path().exists());

    // Second delete on an absent file still succeeds.
    store.delete()?;

    Ok(())
}
