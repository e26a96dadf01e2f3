use crate::{CardSummary, CatalogSource, CoreError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Page size requested from the catalog service.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Fraction of a page the cursor may sit from the end of the loaded list
/// before the next page is requested.
pub const DEFAULT_FETCH_THRESHOLD: f32 = 0.5;

/// Accumulated listing state for one catalog session.
///
/// Created fresh when a listing surface opens and discarded when it
/// closes. `items` is append-only; `is_fetching` is true only while a
/// request is outstanding, and at most one request is outstanding at a
/// time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerState {
    pub items: Vec<CardSummary>,
    pub next_page: u32,
    pub is_fetching: bool,
}

impl Default for PagerState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page: 1,
            is_fetching: false,
        }
    }
}

impl PagerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the in-flight slot. `None` while a fetch is outstanding.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.is_fetching {
            return None;
        }
        self.is_fetching = true;
        Some(self.next_page)
    }

    /// Appends a fetched page in request order and advances the counter.
    pub fn complete(&mut self, page_items: Vec<CardSummary>) {
        self.items.extend(page_items);
        self.next_page += 1;
        self.is_fetching = false;
    }

    /// Releases the in-flight slot without advancing, so the next trigger
    /// retries the same page.
    pub fn fail(&mut self) {
        self.is_fetching = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was fetched and its items appended.
    Appended(usize),
    /// A previous fetch was still outstanding; no request was issued.
    AlreadyFetching,
}

/// Drives a `CatalogSource` page by page, guarding against overlapping
/// requests.
pub struct Pager {
    source: Arc<dyn CatalogSource>,
    page_size: u32,
    state: Mutex<PagerState>,
}

impl Pager {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: Arc<dyn CatalogSource>, page_size: u32) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            state: Mutex::new(PagerState::new()),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn snapshot(&self) -> PagerState {
        self.state.lock().clone()
    }

    /// Fetches the next catalog page and appends it to the session state.
    ///
    /// Calls arriving while a request is outstanding collapse to
    /// `AlreadyFetching` without touching the network. The state lock is
    /// never held across the await.
    pub async fn fetch_next_page(&self) -> Result<FetchOutcome, CoreError> {
        let page = match self.state.lock().begin_fetch() {
            Some(page) => page,
            None => return Ok(FetchOutcome::AlreadyFetching),
        };
        match self.source.summaries(page, self.page_size).await {
            Ok(batch) => {
                let appended = batch.len();
                self.state.lock().complete(batch);
                tracing::debug!(page, appended, "catalog page fetched");
                Ok(FetchOutcome::Appended(appended))
            }
            Err(e) => {
                self.state.lock().fail();
                tracing::warn!(page, error = %e, "catalog page fetch failed");
                Err(e)
            }
        }
    }
}

/// Level trigger for the listing surface.
///
/// True whenever the cursor sits within `threshold` of a page of the end
/// of the loaded list, and always true for an empty list (initial load).
/// It may keep firing near the boundary; the overlap guard collapses the
/// burst to a single request.
pub fn near_end(cursor: usize, loaded: usize, page_size: u32, threshold: f32) -> bool {
    if loaded == 0 {
        return true;
    }
    let window = (page_size as f32 * threshold).ceil() as usize;
    loaded.saturating_sub(cursor + 1) <= window
}
