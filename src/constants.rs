//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers of the simulated backend so the
//! services and the configuration layer agree on defaults.

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for player statistics (5 minutes)
    pub const PLAYER_STATS_SECONDS: u64 = 300;

    /// TTL for scraped news, sentiment and images (15 minutes)
    pub const SCRAPED_DATA_SECONDS: u64 = 900;
}

/// Artificial latencies of the simulated backend in milliseconds
pub mod latency {
    /// Scraping a stats page
    pub const SCRAPE_PAGE_MS: u64 = 800;

    /// Fetching player statistics
    pub const FETCH_STATS_MS: u64 = 1200;

    /// Running the projection model
    pub const PREDICT_MS: u64 = 1000;

    /// Scraping news articles
    pub const NEWS_MS: u64 = 1500;

    /// Analyzing social sentiment
    pub const SENTIMENT_MS: u64 = 1200;

    /// Scraping images
    pub const IMAGES_MS: u64 = 1200;
}

/// Default limits for scraped collections
pub mod limits {
    /// Default number of news articles returned
    pub const DEFAULT_NEWS_LIMIT: usize = 5;

    /// Default number of images returned
    pub const DEFAULT_IMAGE_LIMIT: usize = 5;

    /// News articles requested during enrichment
    pub const ENRICH_NEWS_LIMIT: usize = 4;

    /// Images requested during enrichment
    pub const ENRICH_IMAGE_LIMIT: usize = 2;

    /// Extra images generated beyond the requested limit
    pub const IMAGE_OVERFETCH: usize = 3;
}

/// Parameters of the simulated models
pub mod model {
    /// Maximum absolute adjustment applied by the projection model
    pub const PREDICTION_ADJUSTMENT: f64 = 2.0;

    /// Maximum absolute jitter applied to fetched projected points
    pub const FETCH_POINTS_JITTER: f64 = 1.0;

    /// Weight of relevance in the news ranking score
    pub const NEWS_RELEVANCE_WEIGHT: f64 = 0.7;

    /// Weight of recency (in days) in the news ranking score
    pub const NEWS_RECENCY_WEIGHT: f64 = 0.3;

    /// Lower bound of the sentiment score
    pub const SENTIMENT_MIN: f64 = 0.3;

    /// Upper bound of the sentiment score
    pub const SENTIMENT_MAX: f64 = 0.9;

    /// Lower bound (inclusive) of the mention count
    pub const MENTIONS_MIN: u32 = 500;

    /// Upper bound (exclusive) of the mention count
    pub const MENTIONS_MAX: u32 = 10_000;

    /// Probability that a query is trending
    pub const TRENDING_PROBABILITY: f64 = 0.3;

    /// Sentiment score reported when enrichment fails
    pub const NEUTRAL_SENTIMENT: f64 = 0.5;
}

/// Sentiment tone thresholds used for display
pub mod sentiment_tone {
    /// Scores at or above this are positive
    pub const POSITIVE_THRESHOLD: f64 = 0.7;

    /// Scores at or above this (and below positive) are neutral
    pub const NEUTRAL_THRESHOLD: f64 = 0.4;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for overriding the log file path
    pub const LOG_FILE: &str = "GRIDIRON_LOG_FILE";

    /// Environment variable for seeding the random source
    pub const SEED: &str = "GRIDIRON_SEED";

    /// Environment variable for the injected failure rate
    pub const FAILURE_RATE: &str = "GRIDIRON_FAILURE_RATE";

    /// Environment variable that disables simulated latency when set
    pub const NO_LATENCY: &str = "GRIDIRON_NO_LATENCY";
}

/// URL scraped by the first pipeline stage
pub const PLAYER_STATS_SOURCE_URL: &str = "https://stats.example.com/nfl/players";

/// Application name used for config and log paths
pub const APP_DIR_NAME: &str = "gridiron_feed";

/// Default log file name
pub const LOG_FILE_NAME: &str = "gridiron_feed.log";
