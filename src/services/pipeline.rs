//! Live stats pipeline: scrape, fetch and project player statistics.

use std::sync::Arc;
use tracing::{error, info, instrument};

use super::cache::TtlCache;
use super::simulation::SimulatedBackend;
use crate::constants::{PLAYER_STATS_SOURCE_URL, latency, model};
use crate::error::AppError;
use crate::mock_data::{RosterTemplate, YardageTemplate, roster_templates};
use crate::models::{Player, PlayerStats};

/// Cache key of the player stats feed
pub const PLAYER_STATS_KEY: &str = "player_stats";

pub type PlayerStatsCache = TtlCache<Vec<Player>>;

/// Runs the simulated stats stages against an injected cache
#[derive(Debug, Clone)]
pub struct DataPipeline {
    cache: Arc<PlayerStatsCache>,
    backend: SimulatedBackend,
}

impl DataPipeline {
    pub fn new(cache: Arc<PlayerStatsCache>, backend: SimulatedBackend) -> Self {
        Self { cache, backend }
    }

    pub fn cache(&self) -> &Arc<PlayerStatsCache> {
        &self.cache
    }

    /// Simulates scraping a stats page. The returned text is informational only.
    #[instrument(skip(self))]
    pub async fn scrape_player_data(&self, url: &str) -> Result<String, AppError> {
        info!("Scraping data from: {}", url);
        self.backend
            .call("page scrape", url, latency::SCRAPE_PAGE_MS)
            .await?;
        Ok(format!("Scraped data from {url} successfully"))
    }

    /// Returns the cached roster while fresh unless `refresh` is set,
    /// otherwise fetches a newly perturbed roster and caches it.
    #[instrument(skip(self))]
    pub async fn fetch_player_stats(&self, refresh: bool) -> Result<Arc<Vec<Player>>, AppError> {
        if !refresh && let Some(cached) = self.cache.get(PLAYER_STATS_KEY).await {
            info!("Returning cached player stats");
            return Ok(cached);
        }

        info!("Fetching fresh player stats");
        self.backend
            .call("player stats fetch", PLAYER_STATS_KEY, latency::FETCH_STATS_MS)
            .await?;

        let players: Vec<Player> = roster_templates()
            .iter()
            .map(|template| self.perturb(template))
            .collect();

        Ok(self.cache.put(PLAYER_STATS_KEY, players).await)
    }

    /// Applies the simulated projection model: each player's projected points
    /// move by up to two points, are rounded to one decimal and floored at zero.
    #[instrument(skip(self, players), fields(player_count = players.len()))]
    pub async fn process_player_predictions(
        &self,
        players: &[Player],
    ) -> Result<Vec<Player>, AppError> {
        info!("Processing player predictions");
        self.backend
            .call("projection model", "players", latency::PREDICT_MS)
            .await?;

        let rng = self.backend.rng();
        Ok(players
            .iter()
            .map(|player| {
                let adjustment =
                    rng.uniform(-model::PREDICTION_ADJUSTMENT, model::PREDICTION_ADJUSTMENT);
                player.with_projected_points(adjusted_points(
                    player.stats.projected_points,
                    adjustment,
                ))
            })
            .collect())
    }

    /// Scrape, fetch (always refreshed) and predict, strictly in order.
    /// The first failing stage aborts the run and its error is returned as is.
    #[instrument(skip(self))]
    pub async fn run_data_pipeline(&self) -> Result<Vec<Player>, AppError> {
        info!("Starting data pipeline");

        let result = async {
            self.scrape_player_data(PLAYER_STATS_SOURCE_URL).await?;
            let players = self.fetch_player_stats(true).await?;
            self.process_player_predictions(&players).await
        }
        .await;

        match &result {
            Ok(players) => info!(
                "Data pipeline completed successfully with {} players",
                players.len()
            ),
            Err(e) => error!("Error in data pipeline: {}", e),
        }

        result
    }

    fn perturb(&self, template: &RosterTemplate) -> Player {
        let rng = self.backend.rng();
        let bump = |yardage: Option<YardageTemplate>| {
            yardage.map(|y| y.base + rng.int_below(0, y.jitter.max(1)))
        };

        Player {
            id: template.id.to_string(),
            name: template.name.to_string(),
            position: template.position.to_string(),
            team: template.team.to_string(),
            stats: PlayerStats {
                pass_yards: bump(template.pass_yards),
                rush_yards: bump(template.rush_yards),
                receiving_yards: bump(template.receiving_yards),
                touchdowns: Some(template.touchdowns),
                projected_points: template.projected_points
                    + rng.uniform(-model::FETCH_POINTS_JITTER, model::FETCH_POINTS_JITTER),
            },
        }
    }
}

/// Adds the model adjustment, rounds to one decimal and floors at zero
pub fn adjusted_points(projected_points: f64, adjustment: f64) -> f64 {
    let rounded = ((projected_points + adjustment) * 10.0).round() / 10.0;
    if rounded > 0.0 { rounded } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::simulation::SimRng;
    use std::time::Duration;

    fn pipeline(seed: u64, failure_rate: f64) -> DataPipeline {
        let cache = Arc::new(TtlCache::new("player_stats", Duration::from_secs(300)));
        let backend = SimulatedBackend::new(SimRng::seeded(seed), true, failure_rate);
        DataPipeline::new(cache, backend)
    }

    #[test]
    fn test_adjusted_points_rounding_and_floor() {
        assert_eq!(adjusted_points(24.6, 0.37), 25.0);
        assert_eq!(adjusted_points(16.0, -1.0), 15.0);
        assert_eq!(adjusted_points(1.0, -2.0), 0.0);
        assert_eq!(adjusted_points(0.02, -0.04), 0.0);
        assert!(adjusted_points(0.02, -0.04).is_sign_positive());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrape_player_data_message() {
        let message = pipeline(1, 0.0)
            .scrape_player_data("https://stats.example.com/nfl/players")
            .await
            .unwrap();
        assert_eq!(
            message,
            "Scraped data from https://stats.example.com/nfl/players successfully"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_stats_within_template_ranges() {
        let players = pipeline(11, 0.0).fetch_player_stats(false).await.unwrap();
        let templates = roster_templates();
        assert_eq!(players.len(), templates.len());

        for (player, template) in players.iter().zip(&templates) {
            assert_eq!(player.id, template.id);
            assert_eq!(player.stats.touchdowns, Some(template.touchdowns));
            let delta = player.stats.projected_points - template.projected_points;
            assert!(delta.abs() <= 1.0 + 1e-9);
            if let (Some(yards), Some(t)) = (player.stats.pass_yards, template.pass_yards) {
                assert!(yards >= t.base && yards < t.base + t.jitter);
            }
            assert_eq!(player.stats.rush_yards.is_some(), template.rush_yards.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_stats_cached_within_ttl() {
        let pipeline = pipeline(5, 0.0);
        let first = pipeline.fetch_player_stats(false).await.unwrap();

        tokio::time::advance(Duration::from_secs(299)).await;
        let second = pipeline.fetch_player_stats(false).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_stats_regenerated_after_ttl() {
        let pipeline = pipeline(5, 0.0);
        let first = pipeline.fetch_player_stats(false).await.unwrap();

        tokio::time::advance(Duration::from_secs(300)).await;
        let second = pipeline.fetch_player_stats(false).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(*first, *second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_bypasses_fresh_cache() {
        let pipeline = pipeline(5, 0.0);
        let first = pipeline.fetch_player_stats(false).await.unwrap();
        let refreshed = pipeline.fetch_player_stats(true).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &refreshed));

        let cached = pipeline.fetch_player_stats(false).await.unwrap();
        assert!(Arc::ptr_eq(&refreshed, &cached));
    }

    #[tokio::test(start_paused = true)]
    async fn test_predictions_never_negative() {
        let pipeline = pipeline(21, 0.0);
        let low_scorers: Vec<Player> = roster_templates()
            .iter()
            .map(|t| t.to_player().with_projected_points(0.5))
            .collect();

        for _ in 0..20 {
            let predicted = pipeline
                .process_player_predictions(&low_scorers)
                .await
                .unwrap();
            for player in predicted {
                assert!(player.stats.projected_points >= 0.0);
                let tenths = player.stats.projected_points * 10.0;
                assert!((tenths - tenths.round()).abs() < 1e-9);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_twice_same_ids_fresh_stats() {
        let pipeline = pipeline(8, 0.0);
        let first = pipeline.run_data_pipeline().await.unwrap();
        let second = pipeline.run_data_pipeline().await.unwrap();

        let ids = |players: &[Player]| players.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_ne!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_stages_run_sequentially() {
        let pipeline = pipeline(8, 0.0);
        let start = tokio::time::Instant::now();
        pipeline.run_data_pipeline().await.unwrap();
        let expected = latency::SCRAPE_PAGE_MS + latency::FETCH_STATS_MS + latency::PREDICT_MS;
        assert!(start.elapsed() >= Duration::from_millis(expected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_failure_propagates_unmodified() {
        let pipeline = pipeline(8, 1.0);
        let err = pipeline.run_data_pipeline().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::SimulatedFetch { ref operation, .. } if operation == "page scrape"
        ));
        // Nothing cached when the run aborts before the fetch stage
        assert!(pipeline.cache().is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_seed_same_pipeline_output() {
        let a = pipeline(77, 0.0).run_data_pipeline().await.unwrap();
        let b = pipeline(77, 0.0).run_data_pipeline().await.unwrap();
        assert_eq!(a, b);
    }
}
