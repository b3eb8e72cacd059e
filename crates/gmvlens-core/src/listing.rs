//! The normalized cross-marketplace listing schema.
//!
//! Every extractor produces the same row shape regardless of how the source
//! exposes its data, so the filter / metric / comparison stages and any
//! export collaborator only ever see [`Listing`] and [`ListingCollection`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Which marketplace a collection was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marketplace {
    /// JSON search-API source.
    Shopee,
    /// JavaScript-rendered storefront, reachable only via a headless browser.
    TiktokShop,
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marketplace::Shopee => write!(f, "shopee"),
            Marketplace::TiktokShop => write!(f, "tiktok-shop"),
        }
    }
}

impl FromStr for Marketplace {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shopee" => Ok(Marketplace::Shopee),
            "tiktok" | "tiktok-shop" | "tiktok_shop" => Ok(Marketplace::TiktokShop),
            other => Err(CoreError::UnknownMarketplace(other.to_owned())),
        }
    }
}

/// One product row in the common cross-marketplace schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Display name; extractors substitute a placeholder when the source
    /// omits it rather than dropping the row.
    pub name: String,
    /// Price in rupiah display units. Sources that store a scaled price
    /// (e.g. 100 000× on the search API) are descaled at extraction time.
    pub price: i64,
    /// Units sold. For sources that only expose a truncated sold-count
    /// string this is an estimate; see [`Listing::sold_is_estimate`].
    pub units_sold: i64,
    /// `true` when `units_sold` was parsed from an approximate display
    /// string (e.g. `"1.2k sold"`) rather than an exact count.
    pub sold_is_estimate: bool,
    /// Star rating in `[0.0, 5.0]`. Sources without ratings report `0.0`.
    pub rating: f64,
    /// Product URL. Falls back to the originating search URL when the source
    /// exposes no per-item deep link.
    pub link: String,
    /// Gross merchandise value, always `price * units_sold`. Derived; use
    /// [`Listing::recompute_gmv`] after mutating either input.
    pub gmv: i64,
}

impl Listing {
    /// Builds a listing with `gmv` derived from `price * units_sold`.
    #[must_use]
    pub fn new(
        name: String,
        price: i64,
        units_sold: i64,
        sold_is_estimate: bool,
        rating: f64,
        link: String,
    ) -> Self {
        Self {
            name,
            price,
            units_sold,
            sold_is_estimate,
            rating,
            link,
            gmv: price.saturating_mul(units_sold),
        }
    }

    /// Restores the `gmv = price * units_sold` invariant. Idempotent.
    pub fn recompute_gmv(&mut self) {
        self.gmv = self.price.saturating_mul(self.units_sold);
    }
}

/// An ordered set of [`Listing`]s from one marketplace for one keyword query.
///
/// An empty collection is a valid "no results" outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingCollection {
    pub marketplace: Marketplace,
    /// The keyword the query was issued for.
    pub keyword: String,
    pub listings: Vec<Listing>,
}

impl ListingCollection {
    #[must_use]
    pub fn new(marketplace: Marketplace, keyword: impl Into<String>) -> Self {
        Self {
            marketplace,
            keyword: keyword.into(),
            listings: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Sum of `gmv` across all rows.
    #[must_use]
    pub fn total_gmv(&self) -> i64 {
        self.listings.iter().map(|l| l.gmv).fold(0, i64::saturating_add)
    }

    /// Mean price across all rows, or `None` for an empty collection.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_price(&self) -> Option<f64> {
        if self.listings.is_empty() {
            return None;
        }
        let sum: i64 = self.listings.iter().map(|l| l.price).sum();
        Some(sum as f64 / self.listings.len() as f64)
    }
}
