//! Command handlers: extract → filter → recompute GMV → print.
//!
//! Collections are printed as JSON so export collaborators (CSV/Excel
//! tooling, dashboards) can consume them read-only; this crate knows nothing
//! about file paths or formats.

use gmvlens_core::{
    compare, recompute_gmv, AppConfig, CoreError, ListingCollection, ListingFilter,
};
use gmvlens_scraper::{Extractor, ScraperError, ShopeeExtractor, TiktokExtractor};

use crate::QueryArgs;

pub(crate) async fn search_shopee(config: &AppConfig, query: &QueryArgs) -> anyhow::Result<()> {
    let extractor = ShopeeExtractor::from_config(config)?;
    report_one(run_query(&extractor, query, query.limit).await, query)
}

pub(crate) async fn search_tiktok(config: &AppConfig, query: &QueryArgs) -> anyhow::Result<()> {
    let extractor = TiktokExtractor::from_config(config);
    report_one(run_query(&extractor, query, query.limit).await, query)
}

pub(crate) async fn compare_marketplaces(
    config: &AppConfig,
    query: &QueryArgs,
    tiktok_limit: u32,
) -> anyhow::Result<()> {
    let shopee = ShopeeExtractor::from_config(config)?;
    let tiktok = TiktokExtractor::from_config(config);

    // The two sources share no state; sequential keeps one browser and one
    // HTTP request in flight per user action.
    let left = collection_or_none(run_query(&shopee, query, query.limit).await)?;
    let right = collection_or_none(run_query(&tiktok, query, tiktok_limit).await)?;

    match compare(left.as_ref(), right.as_ref()) {
        Ok(comparison) => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        Err(CoreError::InsufficientData { missing }) => {
            println!(
                "comparison needs results from both marketplaces (missing: {missing}) — nothing to summarize"
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// One acquisition-filter-metric cycle against a single source.
async fn run_query<E: Extractor>(
    extractor: &E,
    query: &QueryArgs,
    limit: u32,
) -> Result<ListingCollection, ScraperError> {
    let collection = extractor.extract(&query.keyword, limit).await?;
    let mut filtered = filter_from(query).apply(&collection);
    recompute_gmv(&mut filtered);
    Ok(filtered)
}

fn filter_from(query: &QueryArgs) -> ListingFilter {
    ListingFilter {
        price_min: query.price_min,
        price_max: query.price_max,
        rating_min: query.rating_min,
    }
}

/// Prints a single-source result: rows as JSON, an explicit no-results
/// message for an empty collection, and "no data found" when the source was
/// unreachable (nothing partial is shown in that case).
fn report_one(
    result: Result<ListingCollection, ScraperError>,
    query: &QueryArgs,
) -> anyhow::Result<()> {
    match result {
        Ok(collection) if collection.is_empty() => {
            println!(
                "no results for \"{}\" on {}",
                query.keyword, collection.marketplace
            );
            Ok(())
        }
        Ok(collection) => {
            println!("{}", serde_json::to_string_pretty(&collection)?);
            Ok(())
        }
        Err(e) if e.is_source_unreachable() => {
            tracing::error!(error = %e, "source unreachable");
            println!("no data found — source unreachable");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Maps a per-source outcome into the comparison's optional input:
/// unreachable → `None` (that side was never produced this session), other
/// errors propagate.
fn collection_or_none(
    result: Result<ListingCollection, ScraperError>,
) -> anyhow::Result<Option<ListingCollection>> {
    match result {
        Ok(collection) => Ok(Some(collection)),
        Err(e) if e.is_source_unreachable() => {
            tracing::error!(error = %e, "source unreachable, leaving this side out of the comparison");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
