use async_trait::async_trait;
use cardex_core::{
    join_saved, parse_saved, Bookmarks, CoreError, KeyValue, SAVED_CARDS_KEY,
};
use cardex_core::kv::memory::MemoryKv;
use std::sync::Arc;

#[test]
fn parse_skips_empties_and_duplicates() {
    assert!(parse_saved("").is_empty());
    assert_eq!(parse_saved("4"), ["4"]);
    assert_eq!(parse_saved("a,,b,a"), ["a", "b"]);
}

#[test]
fn join_is_comma_separated_without_trailer() {
    assert_eq!(join_saved(&[]), "");
    assert_eq!(join_saved(&["a".into()]), "a");
    assert_eq!(join_saved(&["a".into(), "b".into()]), "a,b");
}

#[tokio::test]
async fn toggle_is_an_involution() {
    let bm = Bookmarks::new(Arc::new(MemoryKv::new()));

    assert!(!bm.is_saved("xy7-54").await);
    assert!(bm.toggle("xy7-54").await.unwrap());
    assert!(bm.is_saved("xy7-54").await);
    assert!(!bm.toggle("xy7-54").await.unwrap());
    assert!(!bm.is_saved("xy7-54").await);
}

#[tokio::test]
async fn persisted_value_keeps_the_wire_format() {
    let store = Arc::new(MemoryKv::new());
    store.set(SAVED_CARDS_KEY, "").await.unwrap();
    let bm = Bookmarks::new(store.clone());

    assert!(bm.toggle("4").await.unwrap());
    assert_eq!(
        store.get(SAVED_CARDS_KEY).await.unwrap().as_deref(),
        Some("4")
    );
    assert!(bm.is_saved("4").await);

    assert!(!bm.toggle("4").await.unwrap());
    assert_eq!(
        store.get(SAVED_CARDS_KEY).await.unwrap().as_deref(),
        Some("")
    );
    assert!(!bm.is_saved("4").await);
}

#[tokio::test]
async fn toggle_leaves_other_ids_alone() {
    let bm = Bookmarks::new(Arc::new(MemoryKv::new()));
    bm.toggle("base1-4").await.unwrap();
    bm.toggle("base1-58").await.unwrap();
    bm.toggle("base1-4").await.unwrap();
    assert_eq!(bm.all().await.unwrap(), ["base1-58"]);
}

struct BrokenKv;

#[async_trait]
impl KeyValue for BrokenKv {
    async fn get(&self, _key: &str) -> Result<Option<String>, CoreError> {
        Err(CoreError::Storage("io"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("io"))
    }
}

#[tokio::test]
async fn read_failure_degrades_to_not_saved() {
    let bm = Bookmarks::new(Arc::new(BrokenKv));
    assert!(!bm.is_saved("4").await);
    assert!(bm.toggle("4").await.is_err());
}
