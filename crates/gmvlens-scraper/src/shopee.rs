//! The API-backed extractor for Shopee's search endpoint.

use gmvlens_core::{AppConfig, ListingCollection, Marketplace};

use crate::client::SearchClient;
use crate::error::ScraperError;
use crate::normalize::normalize_item;
use crate::source::Extractor;
use crate::types::SearchItem;

/// Extracts normalized listings from the JSON search API.
pub struct ShopeeExtractor {
    client: SearchClient,
    base_url: String,
}

impl ShopeeExtractor {
    #[must_use]
    pub fn new(client: SearchClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds an extractor from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = SearchClient::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )?;
        Ok(Self::new(client, config.shopee_base_url.clone()))
    }
}

impl Extractor for ShopeeExtractor {
    fn marketplace(&self) -> Marketplace {
        Marketplace::Shopee
    }

    /// One GET, one page. Items are decoded individually: an element whose
    /// shape does not match (missing `item_basic`, ids, or price) is dropped
    /// with a warning and its siblings are kept — a single bad item never
    /// fails the batch.
    async fn extract(&self, keyword: &str, limit: u32) -> Result<ListingCollection, ScraperError> {
        let response = self
            .client
            .fetch_search_page(&self.base_url, keyword, limit)
            .await?;

        let mut collection = ListingCollection::new(Marketplace::Shopee, keyword);
        for (index, value) in response
            .items
            .into_iter()
            .take(limit as usize)
            .enumerate()
        {
            let item = match serde_json::from_value::<SearchItem>(value) {
                Ok(envelope) => envelope.item_basic,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping search item with unexpected shape");
                    continue;
                }
            };
            match normalize_item(item, &self.base_url) {
                Ok(listing) => collection.listings.push(listing),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping search item that failed normalization");
                }
            }
        }

        tracing::debug!(
            keyword,
            rows = collection.len(),
            "shopee extraction complete"
        );
        Ok(collection)
    }
}
