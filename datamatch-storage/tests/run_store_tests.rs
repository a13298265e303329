use std::time::Duration;

use chrono::Utc;
use datamatch_core::{ColumnMatch, CoreError, RunRecord};
use datamatch_storage::RunStore;
use pretty_assertions::assert_eq;

fn sample_run() -> RunRecord {
    RunRecord::new(
        "left".to_string(),
        "right".to_string(),
        Some("exact".to_string()),
        3,
        Vec::new(),
        Vec::new(),
        Vec::new(),
        vec![ColumnMatch("id".to_string(), "id".to_string(), 1.0)],
        Duration::from_millis(120),
    )
}

#[tokio::test]
async fn test_save_then_get_returns_identical_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = RunStore::new(dir.path());

    let run = sample_run();
    store.save(&run).await.unwrap();

    let fetched = store.get(&run.id.to_string()).await.unwrap();
    assert_eq!(fetched, serde_json::to_value(&run).unwrap());
}

#[tokio::test]
async fn test_get_unknown_run_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = RunStore::new(dir.path());

    match store.get("no-such-run").await {
        Err(CoreError::RunNotFound(id)) => assert_eq!(id, "no-such-run"),
        other => panic!("expected RunNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_rejects_path_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let store = RunStore::new(dir.path());

    match store.get("../escape").await {
        Err(CoreError::RunNotFound(_)) => {}
        other => panic!("expected RunNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = RunStore::new(dir.path());

    for minutes_ago in [30, 10, 20] {
        let mut run = sample_run();
        run.timestamp = Utc::now() - chrono::Duration::minutes(minutes_ago);
        store.save(&run).await.unwrap();
    }

    let runs = store.list().await.unwrap();
    let timestamps: Vec<&str> = runs
        .iter()
        .map(|r| r["timestamp"].as_str().unwrap())
        .collect();

    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
    assert_eq!(runs.len(), 3);
}

#[tokio::test]
async fn test_list_on_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = RunStore::new(dir.path().join("never-created"));

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_record_without_timestamp_fails_listing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(dir.path().join("stray.json"), br#"{"id": "x"}"#).unwrap();

    let store = RunStore::new(dir.path());
    match store.list().await {
        Err(CoreError::MalformedFile(_)) => {}
        other => panic!("expected MalformedFile, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_leaves_only_the_run_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = RunStore::new(dir.path());

    let run = sample_run();
    store.save(&run).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{}.json", run.id)]);
}
