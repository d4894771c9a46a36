use chrono::Utc;
use futures::future::try_join3;
use tracing::{error, info, instrument, warn};

use super::{ImageOptions, NewsOptions, ScrapingService, validate_query};
use crate::constants::limits;
use crate::models::EnrichedData;
use crate::services::notifier::Notice;

impl ScrapingService {
    /// Fans out news, sentiment and image scraping for `query` and merges
    /// the results.
    ///
    /// Never fails. A blank query or any failed source is reported through
    /// the notifier and yields [`EnrichedData::fallback`]. The three sources
    /// run concurrently and fail together: the first error wins and the
    /// remaining futures are dropped.
    #[instrument(skip(self))]
    pub async fn enrich_data_with_scraped_sources(&self, query: &str) -> EnrichedData {
        let query = match validate_query(query) {
            Ok(query) => query,
            Err(e) => {
                warn!("Enrichment skipped: {}", e);
                self.notifier().notify(Notice::error(e.user_message()));
                return EnrichedData::fallback();
            }
        };

        info!("Enriching data for \"{}\"", query);
        let news_options = NewsOptions::with_limit(limits::ENRICH_NEWS_LIMIT);
        let image_options = ImageOptions::with_limit(limits::ENRICH_IMAGE_LIMIT);

        let result = try_join3(
            self.scrape_news_articles(query, news_options),
            self.scrape_social_sentiment(query, false),
            self.scrape_images(query, image_options),
        )
        .await;

        match result {
            Ok((news, sentiment, images)) => {
                info!(
                    "Enriched \"{}\": {} articles, {} images",
                    query,
                    news.len(),
                    images.len()
                );
                EnrichedData {
                    news,
                    sentiment,
                    images,
                    last_updated: Utc::now(),
                }
            }
            Err(e) => {
                error!("Error enriching data for \"{}\": {}", query, e);
                self.notifier().notify(Notice::error(e.user_message()));
                EnrichedData::fallback()
            }
        }
    }
}
