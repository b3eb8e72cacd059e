pub mod client;
pub mod error;
pub mod normalize;
mod parse;
mod retry;
pub mod shopee;
pub mod source;
pub mod tiktok;
pub mod types;

pub use client::SearchClient;
pub use error::ScraperError;
pub use shopee::ShopeeExtractor;
pub use source::Extractor;
pub use tiktok::TiktokExtractor;
pub use types::{RawItem, RawRating, SearchItem, SearchResponse};
