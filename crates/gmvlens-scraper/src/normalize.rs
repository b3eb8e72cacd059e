//! Normalization from raw search-API items to [`gmvlens_core::Listing`].

use gmvlens_core::Listing;

use crate::error::ScraperError;
use crate::types::RawItem;

/// Factor between the API's stored price and the rupiah display value.
///
/// `150000000` upstream means Rp1.500 on the storefront. The scale is an
/// assumption about this one endpoint, so it lives here and nowhere else —
/// the DOM source parses display prices directly and must not inherit it.
const PRICE_SCALE: i64 = 100_000;

/// Placeholder name for items the source returns without one.
pub const FALLBACK_NAME: &str = "(unnamed listing)";

/// Normalizes a raw [`RawItem`] into a [`Listing`].
///
/// Optional fields default (`sold` → 0, rating → 0.0, name → placeholder);
/// the price is descaled and truncated to whole rupiah. `gmv` is derived by
/// the `Listing` constructor.
///
/// # Errors
///
/// Returns [`ScraperError::Normalization`] if the stored price is negative —
/// the only raw shape that cannot be represented in the schema. Missing ids
/// are rejected earlier, at item decode time.
pub fn normalize_item(item: RawItem, base_url: &str) -> Result<Listing, ScraperError> {
    if item.price < 0 {
        return Err(ScraperError::Normalization {
            item: item.itemid.to_string(),
            reason: format!("negative stored price {}", item.price),
        });
    }

    let name = match item.name {
        Some(n) if !n.is_empty() => n,
        _ => FALLBACK_NAME.to_owned(),
    };

    let price = item.price / PRICE_SCALE;
    let rating = item
        .item_rating
        .map(|r| r.rating_star)
        .unwrap_or(0.0)
        .clamp(0.0, 5.0);

    let link = format!(
        "{}/product/{}/{}",
        base_url.trim_end_matches('/'),
        item.shopid,
        item.itemid
    );

    Ok(Listing::new(
        name,
        price,
        item.sold.max(0),
        false,
        rating,
        link,
    ))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;
