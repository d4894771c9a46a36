//! Simulated data services and the session context that wires them together.

pub mod cache;
pub mod notifier;
pub mod pipeline;
pub mod scraping;
pub mod simulation;

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use cache::TtlCache;
use notifier::Notifier;
use pipeline::{DataPipeline, PlayerStatsCache};
use scraping::{ScrapingCache, ScrapingService};
use simulation::{SimRng, SimulatedBackend};

/// Per-session service graph.
///
/// The caches and the random source are created once here and shared by
/// every service built from this context.
#[derive(Debug, Clone)]
pub struct Services {
    pub pipeline: DataPipeline,
    pub scraping: ScrapingService,
}

impl Services {
    /// Builds the services from configuration, seeding the random source
    /// from `config.rng_seed` when present.
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> Self {
        let rng = SimRng::from_seed_option(config.rng_seed);
        let backend = SimulatedBackend::from_config(config, rng);

        let player_cache: Arc<PlayerStatsCache> =
            Arc::new(TtlCache::new("player_stats", config.player_stats_ttl()));
        let scraping_cache: Arc<ScrapingCache> =
            Arc::new(TtlCache::new("scraped_data", config.scraping_ttl()));

        info!(
            "Services ready (latency: {}, failure rate: {}, seeded: {})",
            config.simulate_latency,
            config.failure_rate,
            config.rng_seed.is_some()
        );

        Self {
            pipeline: DataPipeline::new(player_cache, backend.clone()),
            scraping: ScrapingService::new(scraping_cache, backend, notifier),
        }
    }
}
