//! Simulated scraping of news, social sentiment and images, plus the
//! enrichment orchestrator that merges them.

pub mod images;
pub mod news;
pub mod orchestrator;
pub mod sentiment;

use std::sync::Arc;
use tracing::warn;

use super::cache::TtlCache;
use super::notifier::Notifier;
use super::simulation::SimulatedBackend;
use crate::constants::limits;
use crate::error::AppError;
use crate::models::{Article, ImageAsset, ImageKind, SentimentScore};

/// Everything the scraping cache can hold, one variant per generator
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapedPayload {
    News(Vec<Article>),
    Sentiment(SentimentScore),
    Images(Vec<ImageAsset>),
}

pub type ScrapingCache = TtlCache<ScrapedPayload>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsOptions {
    pub refresh: bool,
    pub limit: usize,
}

impl Default for NewsOptions {
    fn default() -> Self {
        Self {
            refresh: false,
            limit: limits::DEFAULT_NEWS_LIMIT,
        }
    }
}

impl NewsOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    pub refresh: bool,
    pub limit: usize,
    pub kind: ImageKind,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            refresh: false,
            limit: limits::DEFAULT_IMAGE_LIMIT,
            kind: ImageKind::Player,
        }
    }
}

impl ImageOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

pub fn news_key(query: &str) -> String {
    format!("news_{query}")
}

pub fn sentiment_key(query: &str) -> String {
    format!("sentiment_{query}")
}

pub fn images_key(kind: ImageKind, query: &str) -> String {
    format!("images_{kind}_{query}")
}

/// Rejects blank queries; returns the query without surrounding whitespace
pub fn validate_query(query: &str) -> Result<&str, AppError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyQuery);
    }
    Ok(trimmed)
}

pub fn validate_limit(limit: usize) -> Result<usize, AppError> {
    if limit == 0 {
        return Err(AppError::InvalidLimit { limit });
    }
    Ok(limit)
}

/// Scraping generators sharing one injected cache, backend and notifier
#[derive(Debug, Clone)]
pub struct ScrapingService {
    cache: Arc<ScrapingCache>,
    backend: SimulatedBackend,
    notifier: Arc<dyn Notifier>,
}

impl ScrapingService {
    pub fn new(
        cache: Arc<ScrapingCache>,
        backend: SimulatedBackend,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cache,
            backend,
            notifier,
        }
    }

    pub fn cache(&self) -> &Arc<ScrapingCache> {
        &self.cache
    }

    pub(crate) fn backend(&self) -> &SimulatedBackend {
        &self.backend
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Fresh cached payload for `key`, if any. A payload of the wrong kind
    /// under a key is treated as a miss.
    pub(crate) async fn cached<T>(
        &self,
        key: &str,
        extract: impl FnOnce(&ScrapedPayload) -> Option<T>,
    ) -> Option<T> {
        let payload = self.cache.get(key).await?;
        let extracted = extract(payload.as_ref());
        if extracted.is_none() {
            warn!("Unexpected payload kind cached under key={}", key);
        }
        extracted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_qualified_keys() {
        assert_eq!(news_key("Chiefs"), "news_Chiefs");
        assert_eq!(sentiment_key("Chiefs"), "sentiment_Chiefs");
        assert_eq!(images_key(ImageKind::Team, "Chiefs"), "images_team_Chiefs");
        assert_ne!(
            images_key(ImageKind::Player, "Chiefs"),
            images_key(ImageKind::Game, "Chiefs")
        );
    }

    #[test]
    fn test_validate_query() {
        assert_eq!(validate_query("  Patrick Mahomes ").unwrap(), "Patrick Mahomes");
        assert!(matches!(validate_query(""), Err(AppError::EmptyQuery)));
        assert!(matches!(validate_query(" \t "), Err(AppError::EmptyQuery)));
    }

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(3).unwrap(), 3);
        assert!(matches!(
            validate_limit(0),
            Err(AppError::InvalidLimit { limit: 0 })
        ));
    }

    #[test]
    fn test_option_defaults() {
        let news = NewsOptions::default();
        assert!(!news.refresh);
        assert_eq!(news.limit, 5);

        let images = ImageOptions::with_limit(2);
        assert_eq!(images.limit, 2);
        assert_eq!(images.kind, ImageKind::Player);
    }
}
