mod commands;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gmvlens")]
#[command(about = "Cross-marketplace product listing analytics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Query parameters shared by every command, one set per user action.
#[derive(Debug, Args)]
struct QueryArgs {
    /// Search keyword.
    #[arg(long)]
    keyword: String,

    /// Maximum listings to extract.
    #[arg(long, default_value_t = 20)]
    limit: u32,

    /// Inclusive lower price bound, rupiah.
    #[arg(long, default_value_t = 0)]
    price_min: i64,

    /// Inclusive upper price bound, rupiah.
    #[arg(long, default_value_t = i64::MAX)]
    price_max: i64,

    /// Minimum rating. Note: the storefront source exposes no ratings, so
    /// its rows carry 0.0 and any bound above that filters them all out.
    #[arg(long, default_value_t = 0.0)]
    rating_min: f64,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the Shopee API source.
    Shopee(QueryArgs),
    /// Search the TikTok Shop storefront via a headless browser.
    Tiktok(QueryArgs),
    /// Query both sources and compare per-source count, GMV, and mean price.
    Compare {
        #[command(flatten)]
        query: QueryArgs,

        /// Maximum listings to extract from the storefront side (browser
        /// extraction is slower, so it defaults lower).
        #[arg(long, default_value_t = 10)]
        tiktok_limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = gmvlens_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Shopee(query) => commands::search_shopee(&config, &query).await,
        Commands::Tiktok(query) => commands::search_tiktok(&config, &query).await,
        Commands::Compare {
            query,
            tiktok_limit,
        } => commands::compare_marketplaces(&config, &query, tiktok_limit).await,
    }
}
