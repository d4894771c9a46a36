use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument};

use super::{NewsOptions, ScrapedPayload, ScrapingService, news_key, validate_limit, validate_query};
use crate::constants::latency;
use crate::error::AppError;
use crate::models::Article;

/// (id, title template, source, summary template, hours old, relevance).
/// `{query}` in templates is replaced with the search query.
const ARTICLE_TEMPLATES: [(&str, &str, &str, &str, i64, f64); 6] = [
    (
        "n1",
        "{query} shows promising performance ahead of weekend game",
        "SportsCentral",
        "Recent analysis of {query} suggests they're in top form. Experts predict a strong showing based on training reports and team statements.",
        2,
        0.95,
    ),
    (
        "n2",
        "Injury concerns for {query} opponents",
        "The Sports Network",
        "Multiple key players from the opposing team are listed as questionable for the upcoming matchup, potentially improving fantasy outlook.",
        8,
        0.89,
    ),
    (
        "n3",
        "Weather conditions may impact {query} performance",
        "Fantasy Insider",
        "Meteorologists predict heavy rain for Sunday's game, which historically has affected scoring patterns and gameplay strategies.",
        12,
        0.78,
    ),
    (
        "n4",
        "Analyst breakdown: {query} statistical trends",
        "Deep Stats",
        "Five-week trend analysis shows consistent improvement in key performance metrics, suggesting continued fantasy point production.",
        24,
        0.92,
    ),
    (
        "n5",
        "Coach confirms strategy shift involving {query}",
        "Insider Report",
        "Team coaching staff revealed plans to adjust their game plan in ways that could significantly boost fantasy relevance.",
        36,
        0.85,
    ),
    (
        "n6",
        "Fantasy experts divided on {query} outlook",
        "Fantasy Debate",
        "Top analysts offer contradicting projections for this week's performance, citing different statistical models and historical data.",
        48,
        0.81,
    ),
];

/// Builds the article set for a query as of `now`
pub fn generate_articles(query: &str, now: DateTime<Utc>) -> Vec<Article> {
    ARTICLE_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, (id, title, source, summary, hours_old, relevance))| Article {
            id: id.to_string(),
            title: title.replace("{query}", query),
            source: source.to_string(),
            summary: summary.replace("{query}", query),
            url: format!("https://example.com/news/{}", index + 1),
            published_at: now - Duration::hours(*hours_old),
            relevance: *relevance,
        })
        .collect()
}

/// Sorts articles best first by pairwise combined score. Ties keep their
/// generated order.
pub fn rank_articles(articles: &mut [Article]) {
    articles.sort_by(Article::ranking_cmp);
}

impl ScrapingService {
    /// News articles for a query, best first, at most `options.limit`.
    ///
    /// The full ranked list is cached under `news_{query}`; cache hits are
    /// truncated to the requested limit.
    #[instrument(skip(self))]
    pub async fn scrape_news_articles(
        &self,
        query: &str,
        options: NewsOptions,
    ) -> Result<Vec<Article>, AppError> {
        let query = validate_query(query)?;
        let limit = validate_limit(options.limit)?;
        let key = news_key(query);

        if !options.refresh
            && let Some(articles) = self
                .cached(&key, |payload| match payload {
                    ScrapedPayload::News(articles) => {
                        Some(articles.iter().take(limit).cloned().collect::<Vec<_>>())
                    }
                    _ => None,
                })
                .await
        {
            info!("Returning cached news for \"{}\"", query);
            return Ok(articles);
        }

        info!("Scraping fresh news for \"{}\"", query);
        self.backend()
            .call("news scrape", query, latency::NEWS_MS)
            .await?;

        let now = Utc::now();
        let mut articles = generate_articles(query, now);
        rank_articles(&mut articles);

        let limited = articles.iter().take(limit).cloned().collect();
        self.cache()
            .put(key, ScrapedPayload::News(articles))
            .await;

        Ok(limited)
    }
}
