//! Retry policy for the search-API client.
//!
//! Extraction is single-shot by design — the default configuration sets
//! `max_retries = 0` and this helper degrades to "call once". It exists so a
//! retry policy can be enabled through configuration without touching call
//! sites. Only network-level failures are retriable; bad statuses and parse
//! failures would return the same result again.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Returns `true` if `err` represents a transient condition worth retrying.
///
/// Retriable: [`ScraperError::Http`] — connection reset, timeout, DNS.
/// Everything else (unexpected status, deserialize, normalization, browser
/// failures) is propagated immediately.
fn is_retriable(err: &ScraperError) -> bool {
    matches!(err, ScraperError::Http(_))
}

/// Executes `operation`, retrying transient errors with exponential backoff.
///
/// On a retriable error the function sleeps `backoff_base_secs * 2^attempt`
/// seconds and tries again, up to `max_retries` additional attempts after
/// the first. The last error is returned when retries are exhausted;
/// non-retriable errors return immediately without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                err
            }
        };

        // Cap the shift to keep the multiplication defined on extreme configs.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient search-API error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
