//! Runtime configuration for the extractors and CLI.

/// Application configuration, loaded from environment variables by
/// [`crate::config::load_app_config`]. Every field has a default, so a bare
/// environment works out of the box.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"gmvlens_scraper=debug"`.
    pub log_level: String,
    /// Search-API base, e.g. `"https://shopee.co.id"`. Also the base for
    /// reconstructed product links.
    pub shopee_base_url: String,
    /// Storefront base for the headless-browser source, e.g.
    /// `"https://www.tiktokglobalshop.com"`.
    pub tiktok_base_url: String,
    /// Whole-request timeout for the search API client.
    pub request_timeout_secs: u64,
    /// `User-Agent` sent on every API request. The search endpoint silently
    /// rejects requests without a realistic one.
    pub user_agent: String,
    /// Fixed idle period after navigation before the rendered page is
    /// inspected. Headless rendering has no "results are live" signal, so a
    /// bounded wait stands in for one.
    pub render_wait_ms: u64,
    /// Upper bound on waiting for the first listing card to appear.
    pub browser_timeout_secs: u64,
    /// Additional attempts after a failed API request. `0` = single-shot.
    pub max_retries: u32,
    /// Base delay in seconds for exponential retry backoff.
    pub retry_backoff_base_secs: u64,
}
