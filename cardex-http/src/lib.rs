use async_trait::async_trait;
use cardex_core::{CardDetail, CardSummary, CatalogSource, CoreError};
use std::time::Duration;

pub mod dto;

pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Catalog source backed by the public card API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CoreError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cardex/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }
}

fn net(e: reqwest::Error) -> CoreError {
    CoreError::Network(e.to_string())
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn summaries(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CardSummary>, CoreError> {
        let url = format!("{}/cards", self.base_url);
        tracing::debug!(page, page_size, "requesting catalog page");
        let resp = self
            .http
            .get(&url)
            .query(&[("page", page), ("pageSize", page_size)])
            .send()
            .await
            .map_err(net)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Network(format!("HTTP {status} for {url}")));
        }
        let body = resp.bytes().await.map_err(net)?;
        dto::decode_page(&body)
    }

    async fn detail(&self, id: &str) -> Result<CardDetail, CoreError> {
        let url = format!("{}/cards/{id}", self.base_url);
        tracing::debug!(id, "requesting card detail");
        let resp = self.http.get(&url).send().await.map_err(net)?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound("card"));
        }
        if !status.is_success() {
            return Err(CoreError::Network(format!("HTTP {status} for {url}")));
        }
        let body = resp.bytes().await.map_err(net)?;
        dto::decode_detail(&body)
    }
}
