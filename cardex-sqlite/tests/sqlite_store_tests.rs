use cardex_core::KeyValue;
use cardex_sqlite::SqliteStore;
use tempfile::tempdir;

#[tokio::test]
async fn absent_key_is_none() {
    let store = SqliteStore::open_memory().await.unwrap();
    assert_eq!(store.get("savedCards").await.unwrap(), None);
}

#[tokio::test]
async fn set_get_and_upsert() {
    let store = SqliteStore::open_memory().await.unwrap();
    store.set("savedCards", "a").await.unwrap();
    store.set("savedCards", "a,b").await.unwrap();
    assert_eq!(store.get("savedCards").await.unwrap().as_deref(), Some("a,b"));
}

#[tokio::test]
async fn open_file_creates_the_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cardex.sqlite3");

    let store = SqliteStore::open_file(&path).await.unwrap();
    store.set("savedCards", "xy7-54").await.unwrap();
    drop(store);
    assert!(path.exists());

    let store = SqliteStore::open_file(&path).await.unwrap();
    assert_eq!(
        store.get("savedCards").await.unwrap().as_deref(),
        Some("xy7-54")
    );
}
