//! Raw response types for the Shopee `search_items` endpoint.
//!
//! ## Observed shape
//!
//! `GET /api/v4/search/search_items` returns an object whose `items` array
//! wraps each listing in an envelope with a nested `item_basic` object —
//! the envelope itself carries ad-tracking fields we ignore.
//!
//! ### `price`
//! Stored at 100 000× the rupiah display value (`150000000` means
//! Rp1.500). The scale is a quirk of this one endpoint; descaling happens in
//! [`crate::normalize`] so no other source inherits the constant.
//!
//! ### `sold`
//! Omitted entirely for listings with no recorded sales. `#[serde(default)]`
//! maps absence to `0` — one missing field must never fail the batch.
//!
//! ### `item_rating` / `rating_star`
//! The whole rating object is absent for unrated listings, and
//! `rating_star` can be absent inside a present object. Both levels default.
//!
//! ### `shopid` / `itemid`
//! Required — product links are reconstructed as
//! `{base}/product/{shopid}/{itemid}`, so an item without them cannot be
//! normalized. Items are decoded individually (see
//! [`crate::shopee`]), so a malformed item drops only itself.

use serde::Deserialize;

/// Top-level response from the search endpoint.
///
/// `items` defaults so a response without the list field (observed when the
/// endpoint rejects a query shape) decodes as "no results" instead of
/// failing. Elements stay as raw JSON values; per-item decoding lives in the
/// extractor so one malformed item cannot sink its siblings.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// One element of `items`: the envelope around `item_basic`.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub item_basic: RawItem,
}

/// The nested `item_basic` object carrying the listing fields we extract.
#[derive(Debug, Deserialize)]
pub struct RawItem {
    /// Display name. Observed missing on delisted items; normalization
    /// substitutes a placeholder.
    #[serde(default)]
    pub name: Option<String>,

    /// Price at 100 000× display value.
    pub price: i64,

    /// Historical units sold. Absent when zero.
    #[serde(default)]
    pub sold: i64,

    /// Rating object; absent for unrated listings.
    #[serde(default)]
    pub item_rating: Option<RawRating>,

    /// Shop ID, required for link reconstruction.
    pub shopid: i64,

    /// Item ID, required for link reconstruction.
    pub itemid: i64,
}

/// Nested rating object.
#[derive(Debug, Deserialize)]
pub struct RawRating {
    /// Star rating in `[0.0, 5.0]`. Can be absent even when the parent
    /// object exists.
    #[serde(default)]
    pub rating_star: f64,
}
