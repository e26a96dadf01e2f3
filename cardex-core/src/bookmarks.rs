use crate::{CoreError, KeyValue};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Fixed storage key for the saved-card set.
pub const SAVED_CARDS_KEY: &str = "savedCards";

/// Splits a persisted comma-joined set. Empty segments are skipped and
/// duplicates dropped, keeping first-seen order.
pub fn parse_saved(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let id = part.trim();
        if id.is_empty() || out.iter().any(|x| x == id) {
            continue;
        }
        out.push(id.to_string());
    }
    out
}

pub fn join_saved(ids: &[String]) -> String {
    ids.join(",")
}

/// Set of saved card identifiers kept in persistent key-value storage.
pub struct Bookmarks {
    store: Arc<dyn KeyValue>,
    // Serializes read-modify-write cycles on the persisted set.
    write: Mutex<()>,
}

impl Bookmarks {
    pub fn new(store: Arc<dyn KeyValue>) -> Self {
        Self {
            store,
            write: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<String>, CoreError> {
        let raw = self.store.get(SAVED_CARDS_KEY).await?;
        Ok(parse_saved(raw.as_deref().unwrap_or("")))
    }

    /// Membership in the persisted set. A store that has never been
    /// written, or that fails to read, reports false.
    pub async fn is_saved(&self, id: &str) -> bool {
        match self.load().await {
            Ok(ids) => ids.iter().any(|x| x == id),
            Err(e) => {
                tracing::warn!(error = %e, "bookmark read failed");
                false
            }
        }
    }

    /// Adds `id` if absent, removes it if present, persists the set, and
    /// returns the new membership state. A failed write leaves the
    /// persisted set unchanged.
    pub async fn toggle(&self, id: &str) -> Result<bool, CoreError> {
        let _guard = self.write.lock().await;
        let mut ids = self.load().await?;
        let now_saved = if let Some(pos) = ids.iter().position(|x| x == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id.to_string());
            true
        };
        self.store.set(SAVED_CARDS_KEY, &join_saved(&ids)).await?;
        Ok(now_saved)
    }

    /// Persisted identifiers in stored order.
    pub async fn all(&self) -> Result<Vec<String>, CoreError> {
        self.load().await
    }
}
