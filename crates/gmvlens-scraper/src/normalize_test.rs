use super::*;
use crate::types::RawRating;

fn raw_item() -> RawItem {
    RawItem {
        name: Some("Gitar Akustik Yamaha".to_owned()),
        price: 150_000_000,
        sold: 42,
        item_rating: Some(RawRating { rating_star: 4.8 }),
        shopid: 123,
        itemid: 456,
    }
}

#[test]
fn descales_price_to_display_units() {
    let listing = normalize_item(raw_item(), "https://shopee.co.id").unwrap();
    assert_eq!(listing.price, 1500);
}

#[test]
fn descaling_truncates_toward_zero() {
    let mut item = raw_item();
    item.price = 150_099_999;
    let listing = normalize_item(item, "https://shopee.co.id").unwrap();
    assert_eq!(listing.price, 1500);
}

#[test]
fn reconstructs_product_link_from_ids() {
    let listing = normalize_item(raw_item(), "https://shopee.co.id").unwrap();
    assert_eq!(listing.link, "https://shopee.co.id/product/123/456");
}

#[test]
fn link_base_trailing_slash_is_stripped() {
    let listing = normalize_item(raw_item(), "https://shopee.co.id/").unwrap();
    assert_eq!(listing.link, "https://shopee.co.id/product/123/456");
}

#[test]
fn gmv_is_derived_from_descaled_price() {
    let listing = normalize_item(raw_item(), "https://shopee.co.id").unwrap();
    assert_eq!(listing.gmv, 1500 * 42);
}

#[test]
fn missing_name_becomes_placeholder() {
    let mut item = raw_item();
    item.name = None;
    let listing = normalize_item(item, "https://shopee.co.id").unwrap();
    assert_eq!(listing.name, FALLBACK_NAME);
}

#[test]
fn empty_name_becomes_placeholder() {
    let mut item = raw_item();
    item.name = Some(String::new());
    let listing = normalize_item(item, "https://shopee.co.id").unwrap();
    assert_eq!(listing.name, FALLBACK_NAME);
}

#[test]
fn missing_rating_defaults_to_zero() {
    let mut item = raw_item();
    item.item_rating = None;
    let listing = normalize_item(item, "https://shopee.co.id").unwrap();
    assert!((listing.rating - 0.0).abs() < f64::EPSILON);
}

#[test]
fn out_of_range_rating_is_clamped() {
    let mut item = raw_item();
    item.item_rating = Some(RawRating { rating_star: 9.9 });
    let listing = normalize_item(item, "https://shopee.co.id").unwrap();
    assert!((listing.rating - 5.0).abs() < f64::EPSILON);
}

#[test]
fn api_sold_count_is_not_an_estimate() {
    let listing = normalize_item(raw_item(), "https://shopee.co.id").unwrap();
    assert!(!listing.sold_is_estimate);
}

#[test]
fn negative_price_is_rejected() {
    let mut item = raw_item();
    item.price = -1;
    let err = normalize_item(item, "https://shopee.co.id").unwrap_err();
    assert!(
        matches!(err, ScraperError::Normalization { ref reason, .. } if reason.contains("negative"))
    );
}
