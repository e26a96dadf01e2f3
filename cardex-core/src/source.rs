use crate::{CardDetail, CardSummary, CoreError};
use async_trait::async_trait;

/// Remote catalog of card summaries and per-card detail.
///
/// Pages are 1-based. The service is trusted to return a stable page
/// sequence for a fixed page size; no deduplication happens on this side.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn summaries(&self, page: u32, page_size: u32)
        -> Result<Vec<CardSummary>, CoreError>;

    /// Single-shot detail lookup. `NotFound` for unknown ids.
    async fn detail(&self, id: &str) -> Result<CardDetail, CoreError>;
}
