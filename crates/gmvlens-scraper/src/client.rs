//! HTTP client for the Shopee search API.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::retry::retry_with_backoff;
use crate::types::SearchResponse;

/// HTTP client for the public `search_items` endpoint.
///
/// Always sends a browser-like `User-Agent` — the endpoint silently rejects
/// requests without one, and that rejection must surface as a transport
/// failure (non-2xx / empty body), not a parse failure. Non-2xx responses
/// become typed errors; retries are off unless configured.
pub struct SearchClient {
    client: Client,
    /// Additional attempts after the first failure. `0` = single-shot.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    backoff_base_secs: u64,
}

impl SearchClient {
    /// Creates a `SearchClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one page of search results for `keyword`.
    ///
    /// Single request per invocation — no pagination. Items are returned as
    /// raw JSON values; decoding and normalization happen in
    /// [`crate::shopee`].
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — network or TLS failure after retries.
    /// - [`ScraperError::Deserialize`] — response body is not valid JSON.
    /// - [`ScraperError::InvalidBaseUrl`] — `base_url` cannot be parsed.
    pub async fn fetch_search_page(
        &self,
        base_url: &str,
        keyword: &str,
        limit: u32,
    ) -> Result<SearchResponse, ScraperError> {
        let url = Self::search_url(base_url, keyword, limit)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url.clone())
                    .header(
                        reqwest::header::ACCEPT,
                        "application/json,text/html;q=0.9,*/*;q=0.8",
                    )
                    .header(reqwest::header::ACCEPT_LANGUAGE, "id-ID,id;q=0.9,en;q=0.8")
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<SearchResponse>(&body).map_err(|e| {
                    ScraperError::Deserialize {
                        context: format!("search page for \"{keyword}\""),
                        source: e,
                    }
                })?;

                Ok(parsed)
            }
        })
        .await
    }

    /// Builds the `search_items` URL for the given base, keyword, and page
    /// size. Query order matches the endpoint's canonical form; the keyword
    /// is percent-encoded by the URL builder.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not a valid
    /// URL base.
    fn search_url(base_url: &str, keyword: &str, limit: u32) -> Result<reqwest::Url, ScraperError> {
        let base = format!(
            "{}/api/v4/search/search_items",
            base_url.trim_end_matches('/')
        );
        let mut url = reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("by", "relevancy")
            .append_pair("keyword", keyword)
            .append_pair("limit", &limit.to_string())
            .append_pair("newest", "0")
            .append_pair("order", "desc")
            .append_pair("page_type", "search");
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
