//! Derived-metric recomputation and the two-marketplace comparison summary.

use serde::Serialize;

use crate::listing::{ListingCollection, Marketplace};
use crate::CoreError;

/// Sets every row's `gmv` to `price * units_sold`.
///
/// Idempotent and infallible; run after any stage that may have touched
/// `price` or `units_sold` so the derived field is never stale.
pub fn recompute_gmv(collection: &mut ListingCollection) {
    for listing in &mut collection.listings {
        listing.recompute_gmv();
    }
}

/// Per-marketplace aggregate over one [`ListingCollection`].
#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceSummary {
    pub marketplace: Marketplace,
    pub listing_count: usize,
    pub total_gmv: i64,
    /// `None` for an empty collection — there is no mean to report, and a
    /// fabricated zero would read as a real price.
    pub mean_price: Option<f64>,
}

impl MarketplaceSummary {
    fn from_collection(collection: &ListingCollection) -> Self {
        Self {
            marketplace: collection.marketplace,
            listing_count: collection.len(),
            total_gmv: collection.total_gmv(),
            mean_price: collection.mean_price(),
        }
    }
}

/// Read-only comparison of two collections, recomputed on demand and never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub left: MarketplaceSummary,
    pub right: MarketplaceSummary,
}

/// Builds a [`Comparison`] from two collections.
///
/// Both sides must have been produced in the current session. A missing side
/// is surfaced as [`CoreError::InsufficientData`] naming the absent
/// marketplace(s) — never a summary with a zeroed-out half that could be
/// mistaken for real results.
///
/// # Errors
///
/// Returns [`CoreError::InsufficientData`] when either argument is `None`.
pub fn compare(
    left: Option<&ListingCollection>,
    right: Option<&ListingCollection>,
) -> Result<Comparison, CoreError> {
    match (left, right) {
        (Some(l), Some(r)) => Ok(Comparison {
            left: MarketplaceSummary::from_collection(l),
            right: MarketplaceSummary::from_collection(r),
        }),
        (l, r) => {
            let mut missing = Vec::new();
            if l.is_none() {
                missing.push("left");
            }
            if r.is_none() {
                missing.push("right");
            }
            Err(CoreError::InsufficientData {
                missing: missing.join(", "),
            })
        }
    }
}
