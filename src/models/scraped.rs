use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::constants::model;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub relevance: f64,
}

impl Article {
    /// Combined scores of `self` and `other` when ranked against each other.
    ///
    /// Both sides use the same recency term, the days from `self` to `other`
    /// publication, so the pair is ordered by relevance alone.
    pub fn combined_scores(&self, other: &Article) -> (f64, f64) {
        let recency_days =
            (other.published_at - self.published_at).num_milliseconds() as f64 / 86_400_000.0;
        let score = |relevance: f64| {
            model::NEWS_RELEVANCE_WEIGHT * relevance + model::NEWS_RECENCY_WEIGHT * recency_days
        };
        (score(self.relevance), score(other.relevance))
    }

    /// Best-first ordering: `Less` when `self` ranks above `other`
    pub fn ranking_cmp(&self, other: &Article) -> Ordering {
        let (own, theirs) = self.combined_scores(other);
        theirs.total_cmp(&own)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub score: f64,
    pub count: u32,
    pub trending: bool,
}

impl SentimentScore {
    /// Sentiment reported when nothing could be analyzed
    pub fn neutral() -> Self {
        SentimentScore {
            score: model::NEUTRAL_SENTIMENT,
            count: 0,
            trending: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    #[default]
    Player,
    Team,
    Game,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Player => "player",
            ImageKind::Team => "team",
            ImageKind::Game => "game",
        }
    }

    /// Subject noun used in alt texts
    pub fn subject(&self) -> &'static str {
        match self {
            ImageKind::Player => "football player",
            ImageKind::Team => "football team",
            ImageKind::Game => "football game",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ImageAsset {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Merged result of all scraped sources for one query
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedData {
    pub news: Vec<Article>,
    pub sentiment: SentimentScore,
    pub images: Vec<ImageAsset>,
    pub last_updated: DateTime<Utc>,
}

impl EnrichedData {
    /// Empty payload with neutral sentiment, returned when enrichment fails
    pub fn fallback() -> Self {
        EnrichedData {
            news: Vec::new(),
            sentiment: SentimentScore::neutral(),
            images: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.news.is_empty() && self.images.is_empty() && self.sentiment == SentimentScore::neutral()
    }
}
