use tracing::{info, instrument};

use super::{ScrapedPayload, ScrapingService, sentiment_key, validate_query};
use crate::constants::{latency, model};
use crate::error::AppError;
use crate::models::SentimentScore;
use crate::services::simulation::SimRng;

/// Draws a synthetic sentiment reading
pub fn generate_sentiment(rng: &SimRng) -> SentimentScore {
    let raw = rng.uniform(model::SENTIMENT_MIN, model::SENTIMENT_MAX);
    SentimentScore {
        score: (raw * 100.0).round() / 100.0,
        count: rng.int_below(model::MENTIONS_MIN, model::MENTIONS_MAX),
        trending: rng.chance(model::TRENDING_PROBABILITY),
    }
}

impl ScrapingService {
    /// Social media sentiment for a query, cached under `sentiment_{query}`
    #[instrument(skip(self))]
    pub async fn scrape_social_sentiment(
        &self,
        query: &str,
        refresh: bool,
    ) -> Result<SentimentScore, AppError> {
        let query = validate_query(query)?;
        let key = sentiment_key(query);

        if !refresh
            && let Some(sentiment) = self
                .cached(&key, |payload| match payload {
                    ScrapedPayload::Sentiment(sentiment) => Some(*sentiment),
                    _ => None,
                })
                .await
        {
            info!("Returning cached sentiment for \"{}\"", query);
            return Ok(sentiment);
        }

        info!("Analyzing social sentiment for \"{}\"", query);
        self.backend()
            .call("sentiment analysis", query, latency::SENTIMENT_MS)
            .await?;

        let sentiment = generate_sentiment(self.backend().rng());
        self.cache()
            .put(key, ScrapedPayload::Sentiment(sentiment))
            .await;

        Ok(sentiment)
    }
}
