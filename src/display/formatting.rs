// src/display/formatting.rs - Text helpers shared by the feed views

use chrono::{DateTime, Utc};
use crossterm::style::Color;

use crate::constants::sentiment_tone;
use crate::models::PlayerStats;

/// Formats how long before `now` something happened, e.g. "3 hours ago".
///
/// Timestamps in the future are treated as happening now.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    let (amount, unit) = if seconds < 60 {
        (seconds, "second")
    } else if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else {
        (seconds / 86_400, "day")
    };

    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

/// Qualitative reading of a sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    Positive,
    Neutral,
    Negative,
}

impl SentimentTone {
    pub fn from_score(score: f64) -> Self {
        if score >= sentiment_tone::POSITIVE_THRESHOLD {
            SentimentTone::Positive
        } else if score >= sentiment_tone::NEUTRAL_THRESHOLD {
            SentimentTone::Neutral
        } else {
            SentimentTone::Negative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentTone::Positive => "Positive",
            SentimentTone::Neutral => "Neutral",
            SentimentTone::Negative => "Negative",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SentimentTone::Positive => Color::Green,
            SentimentTone::Neutral => Color::Yellow,
            SentimentTone::Negative => Color::Red,
        }
    }
}

/// Compact one-line summary of the stats a player actually has
pub fn format_stat_line(stats: &PlayerStats) -> String {
    let mut parts = Vec::new();
    if let Some(yards) = stats.pass_yards {
        parts.push(format!("Pass {yards} yds"));
    }
    if let Some(yards) = stats.rush_yards {
        parts.push(format!("Rush {yards} yds"));
    }
    if let Some(yards) = stats.receiving_yards {
        parts.push(format!("Rec {yards} yds"));
    }
    if let Some(touchdowns) = stats.touchdowns {
        parts.push(format!("TD {touchdowns}"));
    }

    if parts.is_empty() {
        "No stats".to_string()
    } else {
        parts.join(" | ")
    }
}

/// Formats a mention count with thousands separators
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

/// Truncates to `max_chars` characters, marking the cut with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
