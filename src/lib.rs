//! Gridiron Feed Library
//!
//! Simulated fantasy football data services: a TTL cache, a sequential
//! player stats pipeline and a scraping orchestrator that gathers news,
//! social sentiment and images for a search query. All randomness goes
//! through a seedable source and all caches are injected, so sessions are
//! reproducible and testable.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gridiron_feed::{AppError, Config, Services};
//! use gridiron_feed::services::notifier::TracingNotifier;
//! use gridiron_feed::services::scraping::NewsOptions;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let services = Services::from_config(&config, Arc::new(TracingNotifier));
//!
//!     // Projected player stats from the live pipeline
//!     let players = services.pipeline.run_data_pipeline().await?;
//!     println!("{} players projected", players.len());
//!
//!     // Ranked headlines, cached for the configured TTL
//!     let news = services
//!         .scraping
//!         .scrape_news_articles("Patrick Mahomes", NewsOptions::default())
//!         .await?;
//!     for article in &news {
//!         println!("{}", article.title);
//!     }
//!
//!     // Everything at once; failures degrade to an empty payload
//!     let insights = services
//!         .scraping
//!         .enrich_data_with_scraped_sources("Patrick Mahomes")
//!         .await;
//!     println!("sentiment {:.2}", insights.sentiment.score);
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;
pub mod mock_data;
pub mod models;
pub mod services;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{Article, EnrichedData, ImageAsset, ImageKind, Player, SentimentScore};
pub use services::Services;
pub use services::cache::{CacheStats, TtlCache};
pub use services::notifier::{Notice, Notifier};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
