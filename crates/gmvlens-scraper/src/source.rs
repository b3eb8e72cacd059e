//! The extraction seam shared by both marketplace sources.

use gmvlens_core::{ListingCollection, Marketplace};

use crate::error::ScraperError;

/// Produces a [`ListingCollection`] for one `(keyword, limit)` query.
///
/// The two implementations differ completely in mechanism — one decodes a
/// JSON search API, the other inspects a rendered DOM — but downstream
/// stages only ever depend on the collection shape this trait yields.
pub trait Extractor {
    /// Which marketplace this extractor acquires from.
    fn marketplace(&self) -> Marketplace;

    /// Acquires up to `limit` listings for `keyword`.
    ///
    /// Returns an empty collection for "no results"; errors mean the source
    /// was unreachable or the response was untrustworthy as a whole.
    fn extract(
        &self,
        keyword: &str,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<ListingCollection, ScraperError>> + Send;
}
