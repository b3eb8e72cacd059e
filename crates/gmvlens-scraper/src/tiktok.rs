//! The DOM-backed extractor for the TikTok Shop storefront.
//!
//! The search page is JavaScript-rendered, so listings are only reachable by
//! driving a headless Chromium session and inspecting the resulting DOM. The
//! CDP client (`headless_chrome`) is synchronous; the whole session runs
//! inside `spawn_blocking` and the caller awaits one overall completion.
//!
//! Session lifecycle: launch → navigate → wait-for-render → locate cards →
//! per-card field extraction → close. The `Browser` value owns the Chromium
//! process and is scoped to the blocking closure, so the session is released
//! on every exit path — success, per-card skip, or navigation failure.

use std::time::Duration;

use headless_chrome::{Browser, Element, LaunchOptions};

use gmvlens_core::{AppConfig, Listing, ListingCollection, Marketplace};

use crate::error::ScraperError;
use crate::normalize::FALLBACK_NAME;
use crate::parse::{parse_price_text, parse_sold_estimate};
use crate::source::Extractor;

const CARD_SELECTOR: &str = "div[data-e2e='search-card']";
const NAME_SELECTOR: &str = "div[data-e2e='search-card-name']";
const PRICE_SELECTOR: &str = "span[data-e2e='search-card-price']";
const SOLD_SELECTOR: &str = "span[data-e2e='search-card-sell-count']";

/// Extracts normalized listings from the rendered search page.
pub struct TiktokExtractor {
    base_url: String,
    /// Fixed idle period after navigation; rendering exposes no "results are
    /// live" signal, so a bounded wait stands in for one.
    render_wait: Duration,
    /// Upper bound on waiting for the first card to attach.
    browser_timeout: Duration,
}

impl TiktokExtractor {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.tiktok_base_url.clone(),
            render_wait: Duration::from_millis(config.render_wait_ms),
            browser_timeout: Duration::from_secs(config.browser_timeout_secs),
        }
    }

    /// Builds the keyword-parameterized search URL. This is also the `link`
    /// carried by every extracted row: the rendered cards expose no stable
    /// per-product URL, so the originating search URL is the most honest
    /// value available (a known data-fidelity gap, preserved rather than
    /// papered over with a guessed deep-link scheme).
    fn search_url(&self, keyword: &str) -> Result<String, ScraperError> {
        let base = format!("{}/search", self.base_url.trim_end_matches('/'));
        let mut url = reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("keyword", keyword);
        Ok(url.into())
    }
}

impl Extractor for TiktokExtractor {
    fn marketplace(&self) -> Marketplace {
        Marketplace::TiktokShop
    }

    async fn extract(&self, keyword: &str, limit: u32) -> Result<ListingCollection, ScraperError> {
        let url = self.search_url(keyword)?;
        let render_wait = self.render_wait;
        let browser_timeout = self.browser_timeout;
        let limit = limit as usize;

        let listings = tokio::task::spawn_blocking(move || {
            render_and_extract(&url, limit, render_wait, browser_timeout)
        })
        .await
        .map_err(|e| ScraperError::Browser {
            stage: "session",
            source: anyhow::anyhow!(e),
        })??;

        tracing::debug!(keyword, rows = listings.len(), "tiktok extraction complete");

        let mut collection = ListingCollection::new(Marketplace::TiktokShop, keyword);
        collection.listings = listings;
        Ok(collection)
    }
}

/// Runs one full browser session. Navigation and render-wait failures abort
/// the whole extraction (source-unreachable); from card location onward,
/// failures are per-card. The `Browser` drops — and the Chromium process
/// closes — on every return path.
fn render_and_extract(
    url: &str,
    limit: usize,
    render_wait: Duration,
    browser_timeout: Duration,
) -> Result<Vec<Listing>, ScraperError> {
    let browser = Browser::new(LaunchOptions {
        headless: true,
        window_size: Some((1920, 1080)),
        ..Default::default()
    })
    .map_err(|e| ScraperError::Browser {
        stage: "launch",
        source: e,
    })?;

    let tab = browser.new_tab().map_err(|e| ScraperError::Browser {
        stage: "launch",
        source: e,
    })?;

    tab.navigate_to(url).map_err(|e| ScraperError::Browser {
        stage: "navigate",
        source: e,
    })?;
    tab.wait_until_navigated().map_err(|e| ScraperError::Browser {
        stage: "navigate",
        source: e,
    })?;

    // Fixed idle wait for client-side rendering to settle.
    std::thread::sleep(render_wait);

    // A timed-out wait here is indistinguishable from a keyword with no
    // results, and the storefront renders an empty state rather than an
    // error page for those — report "no results" instead of failing.
    if tab
        .wait_for_element_with_custom_timeout(CARD_SELECTOR, browser_timeout)
        .is_err()
    {
        tracing::info!(url, "no listing cards rendered within the timeout");
        return Ok(Vec::new());
    }

    let cards = match tab.find_elements(CARD_SELECTOR) {
        Ok(cards) => cards,
        Err(_) => return Ok(Vec::new()),
    };

    Ok(listings_from_cards(&cards, limit, url))
}

/// One rendered listing card's field accessor.
///
/// `Ok(None)` means the sub-element is absent (the field defaults); `Err`
/// means the read itself failed and the card should be skipped. Abstracted
/// so the per-card loop is testable without a browser.
pub(crate) trait CardFields {
    fn text_of(&self, selector: &str) -> Result<Option<String>, ScraperError>;
}

impl CardFields for Element<'_> {
    fn text_of(&self, selector: &str) -> Result<Option<String>, ScraperError> {
        // An unmatched selector and a protocol failure both surface as `Err`
        // from `find_element`; treat either as "field absent" and let the
        // inner-text read distinguish a genuinely broken node.
        match self.find_element(selector) {
            Ok(element) => element
                .get_inner_text()
                .map(Some)
                .map_err(|e| ScraperError::Browser {
                    stage: "extract",
                    source: e,
                }),
            Err(_) => Ok(None),
        }
    }
}

/// Per-card recovery boundary: any single card's failure converts into
/// "drop this card" with a warning, never propagating past the loop. At most
/// `limit` cards are read; fewer rendered cards yield fewer rows, never
/// padding, never an error.
pub(crate) fn listings_from_cards<C: CardFields>(
    cards: &[C],
    limit: usize,
    search_url: &str,
) -> Vec<Listing> {
    let mut listings = Vec::new();
    for (index, card) in cards.iter().take(limit).enumerate() {
        match extract_card(card, search_url) {
            Ok(listing) => listings.push(listing),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping listing card that failed extraction");
            }
        }
    }
    listings
}

/// Extracts one card's fields. Every field is independently optional except
/// name, which falls back to a placeholder; the sold count is parsed off a
/// truncated display string and marked an estimate.
fn extract_card<C: CardFields>(card: &C, search_url: &str) -> Result<Listing, ScraperError> {
    let name = card
        .text_of(NAME_SELECTOR)?
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_owned());

    let price = card
        .text_of(PRICE_SELECTOR)?
        .as_deref()
        .and_then(parse_price_text)
        .unwrap_or(0);

    let sold = card
        .text_of(SOLD_SELECTOR)?
        .as_deref()
        .map_or(0, parse_sold_estimate);

    Ok(Listing::new(
        name,
        price,
        sold,
        true,
        0.0,
        search_url.to_owned(),
    ))
}

#[cfg(test)]
#[path = "tiktok_test.rs"]
mod tiktok_test;
