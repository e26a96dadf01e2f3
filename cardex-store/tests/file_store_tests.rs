use cardex_core::KeyValue;
use cardex_store::FileStore;
use tempfile::tempdir;

#[tokio::test]
async fn missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("cardex.json")).await.unwrap();
    assert_eq!(store.get("savedCards").await.unwrap(), None);
}

#[tokio::test]
async fn round_trips_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cardex.json");

    let store = FileStore::open(path.clone()).await.unwrap();
    store.set("savedCards", "xy7-54,base1-4").await.unwrap();
    assert_eq!(
        store.get("savedCards").await.unwrap().as_deref(),
        Some("xy7-54,base1-4")
    );
    drop(store);

    let store = FileStore::open(path).await.unwrap();
    assert_eq!(
        store.get("savedCards").await.unwrap().as_deref(),
        Some("xy7-54,base1-4")
    );
}

#[tokio::test]
async fn overwrites_keep_the_latest_value() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("cardex.json")).await.unwrap();
    store.set("savedCards", "a").await.unwrap();
    store.set("savedCards", "a,b").await.unwrap();
    assert_eq!(store.get("savedCards").await.unwrap().as_deref(), Some("a,b"));
}

#[tokio::test]
async fn corrupt_file_is_a_storage_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cardex.json");
    std::fs::write(&path, b"not json").unwrap();
    assert!(FileStore::open(path).await.is_err());
}
