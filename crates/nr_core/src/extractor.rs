use async_trait::async_trait;
use crate::types::ExtractionResult;

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetch the page at `url` and derive its readable text.
    ///
    /// Best effort: any failure along the way yields `None`, never a
    /// partially filled result.
    async fn extract(&self, url: &str) -> Option<ExtractionResult>;
}
