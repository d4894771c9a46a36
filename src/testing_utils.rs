use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::constants::cache_ttl;
use crate::models::{Article, Player, PlayerStats, Prediction, PredictionResult};
use crate::services::cache::TtlCache;
use crate::services::notifier::CollectingNotifier;
use crate::services::pipeline::DataPipeline;
use crate::services::scraping::ScrapingService;
use crate::services::simulation::{SimRng, SimulatedBackend};

/// Seeded services with latency enabled and notices collected in memory.
///
/// Intended for tests running on a paused tokio clock, where the simulated
/// latency advances virtual time only.
#[derive(Debug, Clone)]
pub struct TestContext {
    pub pipeline: DataPipeline,
    pub scraping: ScrapingService,
    pub notifier: Arc<CollectingNotifier>,
}

impl TestContext {
    /// Services that never fail
    pub fn new(seed: u64) -> Self {
        Self::with_failure_rate(seed, 0.0)
    }

    /// Services whose every simulated call fails
    pub fn failing(seed: u64) -> Self {
        Self::with_failure_rate(seed, 1.0)
    }

    pub fn with_failure_rate(seed: u64, failure_rate: f64) -> Self {
        let backend = SimulatedBackend::new(SimRng::seeded(seed), true, failure_rate);
        let notifier = Arc::new(CollectingNotifier::new());

        let player_cache = Arc::new(TtlCache::new(
            "player_stats",
            std::time::Duration::from_secs(cache_ttl::PLAYER_STATS_SECONDS),
        ));
        let scraping_cache = Arc::new(TtlCache::new(
            "scraped_data",
            std::time::Duration::from_secs(cache_ttl::SCRAPED_DATA_SECONDS),
        ));

        Self {
            pipeline: DataPipeline::new(player_cache, backend.clone()),
            scraping: ScrapingService::new(scraping_cache, backend, notifier.clone()),
            notifier,
        }
    }
}

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a quarterback with passing stats only
    pub fn create_quarterback(name: &str, team: &str, projected_points: f64) -> Player {
        Player {
            id: format!("qb-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            position: "QB".to_string(),
            team: team.to_string(),
            stats: PlayerStats {
                pass_yards: Some(300),
                rush_yards: None,
                receiving_yards: None,
                touchdowns: Some(2),
                projected_points,
            },
        }
    }

    /// Creates an article published `hours_old` hours before `now`
    pub fn create_article(id: &str, relevance: f64, hours_old: i64, now: DateTime<Utc>) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            source: "Test Source".to_string(),
            summary: "Summary".to_string(),
            url: format!("https://example.com/news/{id}"),
            published_at: now - Duration::hours(hours_old),
            relevance,
        }
    }

    pub fn create_prediction(id: &str, result: PredictionResult) -> Prediction {
        Prediction {
            id: id.to_string(),
            game: "Chiefs vs Ravens".to_string(),
            prediction: "Chiefs win by 3+".to_string(),
            result,
            date: "2023-09-10".to_string(),
        }
    }

    /// Creates a prediction history with the given settled/pending mix
    pub fn create_prediction_history(correct: usize, incorrect: usize, pending: usize) -> Vec<Prediction> {
        let results = std::iter::repeat_n(PredictionResult::Correct, correct)
            .chain(std::iter::repeat_n(PredictionResult::Incorrect, incorrect))
            .chain(std::iter::repeat_n(PredictionResult::Pending, pending));

        results
            .enumerate()
            .map(|(i, result)| Self::create_prediction(&format!("p{}", i + 1), result))
            .collect()
    }
}

/// Consistency checks shared by unit and integration tests
pub struct PropertyTesting;

impl PropertyTesting {
    /// Validates that a projected roster is well formed
    pub fn validate_player(player: &Player) -> Result<(), String> {
        if player.id.is_empty() {
            return Err("Player id is empty".to_string());
        }
        if player.name.is_empty() {
            return Err(format!("Player {} has no name", player.id));
        }
        if !player.stats.projected_points.is_finite() || player.stats.projected_points < 0.0 {
            return Err(format!(
                "Player {} has invalid projected points {}",
                player.id, player.stats.projected_points
            ));
        }
        Ok(())
    }

    /// Validates that articles are ordered best first
    pub fn validate_articles_ranked(articles: &[Article]) -> Result<(), String> {
        for pair in articles.windows(2) {
            let (first, second) = pair[0].combined_scores(&pair[1]);
            if first < second {
                return Err(format!(
                    "Article {} ({first:.3}) ranked above {} ({second:.3})",
                    pair[0].id, pair[1].id
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PredictionSummary;

    #[test]
    fn test_builder_creates_valid_player() {
        let player = TestDataBuilder::create_quarterback("Jalen Hurts", "PHI", 22.8);
        assert_eq!(player.id, "qb-jalen-hurts");
        assert!(PropertyTesting::validate_player(&player).is_ok());

        let negative = player.with_projected_points(-1.0);
        assert!(PropertyTesting::validate_player(&negative).is_err());
    }

    #[test]
    fn test_prediction_history_mix() {
        let history = TestDataBuilder::create_prediction_history(2, 1, 3);
        assert_eq!(history.len(), 6);

        let summary = PredictionSummary::from_predictions(&history);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.pending, 3);
    }

    #[test]
    fn test_ranked_articles_validation() {
        let now = Utc::now();
        let good = vec![
            TestDataBuilder::create_article("a", 0.9, 1, now),
            TestDataBuilder::create_article("b", 0.8, 30, now),
        ];
        assert!(PropertyTesting::validate_articles_ranked(&good).is_ok());

        let reversed: Vec<_> = good.iter().rev().cloned().collect();
        assert!(PropertyTesting::validate_articles_ranked(&reversed).is_err());
    }

    #[test]
    fn test_failing_context_has_no_notices_yet() {
        let ctx = TestContext::failing(1);
        assert!(ctx.notifier.snapshot().is_empty());
    }
}
