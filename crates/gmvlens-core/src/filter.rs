//! Price-range and minimum-rating filtering over a [`ListingCollection`].

use crate::listing::ListingCollection;

/// Bounds applied uniformly to any normalized collection.
///
/// `apply` is a pure function of its input: it never reorders surviving rows
/// and never grows the collection, so filtering an already-filtered
/// collection with the same bounds is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingFilter {
    /// Inclusive lower price bound, rupiah display units.
    pub price_min: i64,
    /// Inclusive upper price bound, rupiah display units.
    pub price_max: i64,
    /// Inclusive minimum rating.
    ///
    /// Sources that never populate ratings normalize them to `0.0`, which a
    /// `rating_min` of `0.0` always passes. That is the source's implicit
    /// default behavior, kept deliberately: tightening it would silently
    /// drop every row from rating-less marketplaces.
    pub rating_min: f64,
}

impl Default for ListingFilter {
    /// Wide-open bounds: every non-negative price and every rating passes.
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: i64::MAX,
            rating_min: 0.0,
        }
    }
}

impl ListingFilter {
    /// Returns a copy of `collection` retaining rows where
    /// `price_min <= price <= price_max` and `rating >= rating_min`.
    ///
    /// An empty input yields an empty output, not an error.
    #[must_use]
    pub fn apply(&self, collection: &ListingCollection) -> ListingCollection {
        let mut filtered = ListingCollection::new(collection.marketplace, collection.keyword.clone());
        filtered.listings = collection
            .listings
            .iter()
            .filter(|l| {
                l.price >= self.price_min
                    && l.price <= self.price_max
                    && l.rating >= self.rating_min
            })
            .cloned()
            .collect();
        filtered
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
