pub mod app_config;
pub mod compare;
pub mod config;
pub mod filter;
pub mod listing;

pub use app_config::AppConfig;
pub use compare::{compare, recompute_gmv, Comparison, MarketplaceSummary};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use filter::ListingFilter;
pub use listing::{Listing, ListingCollection, Marketplace};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("comparison needs results from both marketplaces; missing: {missing}")]
    InsufficientData { missing: String },

    #[error("unknown marketplace: {0}")]
    UnknownMarketplace(String),
}
