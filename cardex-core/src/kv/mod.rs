use crate::CoreError;
use async_trait::async_trait;

pub mod memory;

/// Persistent string key-value storage. Absent keys read as `None`.
#[async_trait]
pub trait KeyValue: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}
