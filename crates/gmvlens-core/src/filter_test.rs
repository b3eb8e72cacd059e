use super::*;
use crate::listing::{Listing, Marketplace};

fn collection(rows: Vec<(i64, f64)>) -> ListingCollection {
    let mut c = ListingCollection::new(Marketplace::Shopee, "gitar");
    c.listings = rows
        .into_iter()
        .enumerate()
        .map(|(i, (price, rating))| {
            Listing::new(format!("item-{i}"), price, 1, false, rating, "url".into())
        })
        .collect();
    c
}

#[test]
fn retains_rows_inside_both_bounds() {
    let c = collection(vec![(50, 4.0), (150, 4.0), (250, 4.0)]);
    let f = ListingFilter {
        price_min: 100,
        price_max: 200,
        rating_min: 0.0,
    };
    let out = f.apply(&c);
    assert_eq!(out.len(), 1);
    assert_eq!(out.listings[0].price, 150);
}

#[test]
fn price_bounds_are_inclusive() {
    let c = collection(vec![(100, 0.0), (200, 0.0)]);
    let f = ListingFilter {
        price_min: 100,
        price_max: 200,
        rating_min: 0.0,
    };
    assert_eq!(f.apply(&c).len(), 2);
}

#[test]
fn rating_bound_drops_low_rated_rows() {
    let c = collection(vec![(100, 3.9), (100, 4.0), (100, 4.5)]);
    let f = ListingFilter {
        rating_min: 4.0,
        ..ListingFilter::default()
    };
    assert_eq!(f.apply(&c).len(), 2);
}

#[test]
fn zero_rating_min_passes_rating_less_rows() {
    // Rating-less sources normalize to 0.0; a 0.0 bound must not drop them.
    let c = collection(vec![(100, 0.0), (200, 0.0)]);
    let out = ListingFilter::default().apply(&c);
    assert_eq!(out.len(), 2);
}

#[test]
fn empty_input_yields_empty_output() {
    let c = collection(vec![]);
    let out = ListingFilter::default().apply(&c);
    assert!(out.is_empty());
    assert_eq!(out.keyword, "gitar");
}

#[test]
fn filtering_is_idempotent() {
    let c = collection(vec![(50, 2.0), (150, 4.0), (250, 5.0)]);
    let f = ListingFilter {
        price_min: 100,
        price_max: 300,
        rating_min: 3.0,
    };
    let once = f.apply(&c);
    let twice = f.apply(&once);
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.listings.iter().zip(twice.listings.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.price, b.price);
    }
}

#[test]
fn never_grows_the_collection() {
    let c = collection(vec![(100, 5.0), (200, 5.0)]);
    let out = ListingFilter::default().apply(&c);
    assert!(out.len() <= c.len());
}
