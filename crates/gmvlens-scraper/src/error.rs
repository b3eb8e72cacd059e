use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("normalization error for item {item}: {reason}")]
    Normalization { item: String, reason: String },

    #[error("browser failure during {stage}: {source}")]
    Browser {
        /// Which step failed: `launch`, `navigate`, `extract`, or `session`
        /// (the blocking task itself died).
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ScraperError {
    /// `true` when the whole invocation failed before any trustworthy data
    /// was produced — transport errors, bad statuses, and browser failures
    /// up to and including the render wait. Callers surface these as "no
    /// data found" rather than a partial collection.
    #[must_use]
    pub fn is_source_unreachable(&self) -> bool {
        match self {
            ScraperError::Http(_) | ScraperError::UnexpectedStatus { .. } => true,
            ScraperError::Browser { stage, .. } => *stage != "extract",
            _ => false,
        }
    }
}
