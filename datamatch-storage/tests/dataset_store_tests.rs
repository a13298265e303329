use datamatch_core::CoreError;
use datamatch_storage::DatasetStore;
use pretty_assertions::assert_eq;

const CSV: &[u8] = b"name,age\nalice,31\nbob,28\n";

#[tokio::test]
async fn test_store_then_list_strips_extension() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("data.csv", CSV).await.unwrap();
    let datasets = store.list("John Doe").await.unwrap();

    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].name, "data");
    assert_eq!(datasets[0].uploaded_by, "John Doe");
    assert_eq!(datasets[0].runs_count, 0);
    assert_eq!(datasets[0].data.len(), 2);
    assert_eq!(datasets[0].data[0]["name"], serde_json::json!("alice"));
}

#[tokio::test]
async fn test_listing_twice_keeps_the_same_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("data.csv", CSV).await.unwrap();
    let first = store.list("John Doe").await.unwrap();
    let second = store.list("John Doe").await.unwrap();

    assert_eq!(first[0].id, second[0].id);
}

#[tokio::test]
async fn test_store_reuses_id_seen_at_upload() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    let id = store.store("data.csv", CSV).await.unwrap();
    let listed = store.list("John Doe").await.unwrap();

    assert_eq!(listed[0].id, id);
}

#[tokio::test]
async fn test_missing_directory_lists_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path().join("never-created"));

    let datasets = store.list("John Doe").await.unwrap();
    assert!(datasets.is_empty());
}

#[tokio::test]
async fn test_store_overwrites_same_filename() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("data.csv", CSV).await.unwrap();
    store.store("data.csv", b"name\ncarol\n").await.unwrap();

    let datasets = store.list("John Doe").await.unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].data.len(), 1);
    assert_eq!(datasets[0].data[0]["name"], serde_json::json!("carol"));
}

#[tokio::test]
async fn test_store_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("data.csv", CSV).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["data.csv"]);
}

#[tokio::test]
async fn test_load_resolves_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("data.csv", CSV).await.unwrap();
    let data = store.load("data").await.unwrap();

    assert_eq!(data.columns, vec!["name", "age"]);
    assert_eq!(data.row_count(), 2);
}

#[tokio::test]
async fn test_load_unknown_name_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    match store.load("ghost").await {
        Err(CoreError::DatasetNotFound(name)) => assert_eq!(name, "ghost"),
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_rejects_path_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    match store.load("../data").await {
        Err(CoreError::DatasetNotFound(_)) => {}
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_skips_foreign_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("data.csv", CSV).await.unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

    let datasets = store.list("John Doe").await.unwrap();
    assert_eq!(datasets.len(), 1);
}

#[tokio::test]
async fn test_malformed_csv_fails_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(dir.path());

    store.store("bad.csv", b"a,b\n1,2,3\n").await.unwrap();

    match store.list("John Doe").await {
        Err(CoreError::MalformedFile(_)) => {}
        other => panic!("expected MalformedFile, got {other:?}"),
    }
}
