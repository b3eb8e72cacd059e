use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;

const SEARCH_URL: &str = "https://www.tiktokglobalshop.com/search?keyword=gitar";

/// A rendered card stand-in: selector → inner text, or a hard failure on
/// every read to simulate a detached node.
struct FakeCard {
    fields: HashMap<&'static str, &'static str>,
    fail: bool,
}

impl FakeCard {
    fn with(fields: &[(&'static str, &'static str)]) -> Self {
        Self {
            fields: fields.iter().copied().collect(),
            fail: false,
        }
    }

    fn broken() -> Self {
        Self {
            fields: HashMap::new(),
            fail: true,
        }
    }
}

impl CardFields for FakeCard {
    fn text_of(&self, selector: &str) -> Result<Option<String>, ScraperError> {
        if self.fail {
            return Err(ScraperError::Browser {
                stage: "extract",
                source: anyhow::anyhow!("node detached"),
            });
        }
        Ok(self.fields.get(selector).map(|s| (*s).to_string()))
    }
}

fn full_card() -> FakeCard {
    FakeCard::with(&[
        (NAME_SELECTOR, "Gitar Akustik Custom"),
        (PRICE_SELECTOR, "Rp1.250.000"),
        (SOLD_SELECTOR, "250 terjual"),
    ])
}

#[test]
fn extracts_all_fields_from_a_full_card() {
    let listings = listings_from_cards(&[full_card()], 10, SEARCH_URL);
    assert_eq!(listings.len(), 1);
    let l = &listings[0];
    assert_eq!(l.name, "Gitar Akustik Custom");
    assert_eq!(l.price, 1_250_000);
    assert_eq!(l.units_sold, 250);
    assert!(l.sold_is_estimate);
    assert!((l.rating - 0.0).abs() < f64::EPSILON);
    assert_eq!(l.link, SEARCH_URL);
    assert_eq!(l.gmv, 1_250_000 * 250);
}

#[test]
fn missing_name_falls_back_to_placeholder() {
    let card = FakeCard::with(&[(PRICE_SELECTOR, "Rp50.000")]);
    let listings = listings_from_cards(&[card], 10, SEARCH_URL);
    assert_eq!(listings[0].name, FALLBACK_NAME);
}

#[test]
fn missing_price_and_sold_default_to_zero() {
    let card = FakeCard::with(&[(NAME_SELECTOR, "Produk")]);
    let listings = listings_from_cards(&[card], 10, SEARCH_URL);
    assert_eq!(listings[0].price, 0);
    assert_eq!(listings[0].units_sold, 0);
    assert_eq!(listings[0].gmv, 0);
}

#[test]
fn non_numeric_sold_text_defaults_to_zero() {
    let card = FakeCard::with(&[(NAME_SELECTOR, "Produk"), (SOLD_SELECTOR, "belum terjual")]);
    let listings = listings_from_cards(&[card], 10, SEARCH_URL);
    assert_eq!(listings[0].units_sold, 0);
}

#[test]
fn reads_at_most_limit_cards() {
    let cards: Vec<FakeCard> = (0..5).map(|_| full_card()).collect();
    let listings = listings_from_cards(&cards, 3, SEARCH_URL);
    assert_eq!(listings.len(), 3);
}

#[test]
fn fewer_cards_than_limit_yields_exactly_that_many_rows() {
    let cards: Vec<FakeCard> = (0..2).map(|_| full_card()).collect();
    let listings = listings_from_cards(&cards, 10, SEARCH_URL);
    assert_eq!(listings.len(), 2);
}

#[test]
fn failing_card_is_skipped_and_siblings_survive() {
    let cards = vec![full_card(), FakeCard::broken(), full_card()];
    let listings = listings_from_cards(&cards, 10, SEARCH_URL);
    assert_eq!(listings.len(), 2);
}

/// Stand-in for the browser session: its `Drop` flips a flag the way
/// dropping `Browser` closes the Chromium process.
struct SessionProbe {
    closed: Arc<AtomicBool>,
}

impl Drop for SessionProbe {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[test]
fn session_is_released_when_a_card_fails_mid_loop() {
    let closed = Arc::new(AtomicBool::new(false));
    {
        // Mirrors `render_and_extract`: the session value is scoped to the
        // extraction body, and per-card failures never propagate out of the
        // loop, so the scope always exits and the session always drops.
        let _session = SessionProbe {
            closed: Arc::clone(&closed),
        };
        let cards = vec![full_card(), FakeCard::broken(), full_card()];
        let listings = listings_from_cards(&cards, 10, SEARCH_URL);
        assert_eq!(listings.len(), 2);
    }
    assert!(closed.load(Ordering::SeqCst), "session leaked past the extraction scope");
}

#[test]
fn search_url_is_keyword_parameterized_and_encoded() {
    let extractor = TiktokExtractor {
        base_url: "https://www.tiktokglobalshop.com".into(),
        render_wait: Duration::from_millis(0),
        browser_timeout: Duration::from_secs(1),
    };
    let url = extractor.search_url("gitar akustik").unwrap();
    assert_eq!(
        url,
        "https://www.tiktokglobalshop.com/search?keyword=gitar+akustik"
    );
}

#[test]
fn search_url_rejects_invalid_base() {
    let extractor = TiktokExtractor {
        base_url: "not a url".into(),
        render_wait: Duration::from_millis(0),
        browser_timeout: Duration::from_secs(1),
    };
    assert!(matches!(
        extractor.search_url("gitar"),
        Err(ScraperError::InvalidBaseUrl { .. })
    ));
}
