// src/display/views.rs - Pages for each feed view

use chrono::{DateTime, Utc};
use crossterm::style::Color;

use super::formatting::{SentimentTone, format_count, format_relative_time, format_stat_line, truncate};
use super::page::{FeedPage, PAGE_WIDTH};
use crate::models::{
    Article, EnrichedData, Game, ImageAsset, LeaderboardEntry, Player, Prediction,
    PredictionResult, PredictionSummary, SentimentScore,
};

const POINTS_FG: Color = Color::Yellow;
const TRENDING_FG: Color = Color::Magenta;

fn result_color(result: PredictionResult) -> Color {
    match result {
        PredictionResult::Correct => Color::Green,
        PredictionResult::Incorrect => Color::Red,
        PredictionResult::Pending => Color::Yellow,
    }
}

fn result_label(result: PredictionResult) -> &'static str {
    match result {
        PredictionResult::Correct => "Correct",
        PredictionResult::Incorrect => "Incorrect",
        PredictionResult::Pending => "Pending",
    }
}

fn add_games(page: &mut FeedPage, games: &[Game]) {
    for game in games {
        page.add_heading(game.matchup());
        page.add_key_value("Kickoff", format!("{} {}", game.date, game.time));
        page.add_key_value("Spread", &game.spread);
        page.add_muted(format!("{} predictions", format_count(game.predictions_count)));
        page.add_blank();
    }
}

fn add_players(page: &mut FeedPage, players: &[Player]) {
    for player in players {
        page.add_heading(format!("{} ({}, {})", player.name, player.position, player.team));
        page.add_text(format_stat_line(&player.stats));
        page.add_colored_key_value(
            "Projected",
            format!("{:.1} pts", player.stats.projected_points),
            POINTS_FG,
        );
        page.add_blank();
    }
}

fn add_summary(page: &mut FeedPage, summary: &PredictionSummary) {
    page.add_key_value("Total predictions", summary.total.to_string());
    page.add_colored_key_value("Correct", summary.correct.to_string(), Color::Green);
    page.add_colored_key_value("Incorrect", summary.incorrect.to_string(), Color::Red);
    page.add_colored_key_value("Pending", summary.pending.to_string(), Color::Yellow);
    page.add_key_value("Accuracy", format!("{}%", summary.accuracy_percent()));
    page.add_key_value(
        "Settled accuracy",
        format!("{}%", summary.settled_accuracy_percent()),
    );
}

fn add_articles(page: &mut FeedPage, articles: &[Article], now: DateTime<Utc>) {
    if articles.is_empty() {
        page.add_muted("No articles found");
        return;
    }
    for article in articles {
        page.add_heading(truncate(&article.title, PAGE_WIDTH));
        page.add_text(truncate(&article.summary, PAGE_WIDTH * 2));
        page.add_muted(format!(
            "{} | {} | relevance {:.0}%",
            article.source,
            format_relative_time(article.published_at, now),
            article.relevance * 100.0
        ));
        page.add_muted(&article.url);
        page.add_blank();
    }
}

fn add_sentiment(page: &mut FeedPage, sentiment: &SentimentScore) {
    let tone = SentimentTone::from_score(sentiment.score);
    page.add_colored_key_value(
        "Sentiment",
        format!("{:.0}% {}", sentiment.score * 100.0, tone.label()),
        tone.color(),
    );
    page.add_key_value("Mentions", format_count(sentiment.count));
    if sentiment.trending {
        page.add_colored_text("Trending now", TRENDING_FG);
    }
}

fn add_images(page: &mut FeedPage, images: &[ImageAsset]) {
    if images.is_empty() {
        page.add_muted("No images found");
        return;
    }
    for image in images {
        page.add_text(format!("{} ({}x{})", image.alt, image.width, image.height));
        page.add_muted(&image.url);
        let license = image.license.as_deref().unwrap_or("Unknown license");
        page.add_muted(format!("{} | {}", image.source, license));
        page.add_blank();
    }
}

pub fn games_page(games: &[Game]) -> FeedPage {
    let mut page = FeedPage::new("UPCOMING GAMES", "This week's matchups");
    add_games(&mut page, games);
    page
}

pub fn players_page(title: &str, players: &[Player]) -> FeedPage {
    let mut page = FeedPage::new(title, "Fantasy projections");
    add_players(&mut page, players);
    page
}

/// Live stats page for a pipeline run, or its error when the run failed
pub fn live_stats_page(result: &Result<Vec<Player>, String>, now: DateTime<Utc>) -> FeedPage {
    let mut page = FeedPage::new("LIVE STATS", format!("Updated {}", now.format("%H:%M:%S UTC")));
    match result {
        Ok(players) => add_players(&mut page, players),
        Err(message) => page.add_error_message(message),
    }
    page
}

pub fn predictions_page(predictions: &[Prediction]) -> FeedPage {
    let mut page = FeedPage::new("MY PREDICTIONS", "Track record");
    add_summary(&mut page, &PredictionSummary::from_predictions(predictions));
    page.add_blank();

    for prediction in predictions {
        page.add_heading(&prediction.game);
        page.add_colored_key_value(
            &prediction.prediction,
            result_label(prediction.result),
            result_color(prediction.result),
        );
        page.add_muted(&prediction.date);
    }
    page
}

pub fn leaderboard_page(entries: &[LeaderboardEntry]) -> FeedPage {
    let mut page = FeedPage::new("LEADERBOARD", "Top predictors");
    for (rank, entry) in entries.iter().enumerate() {
        page.add_colored_key_value(
            format!("{:>2}. {}", rank + 1, entry.username),
            format!(
                "{}/{} ({}%) streak {}",
                entry.correct_predictions,
                entry.total_predictions,
                entry.accuracy_percent(),
                entry.win_streak
            ),
            if rank == 0 { POINTS_FG } else { Color::White },
        );
    }
    page
}

pub fn news_page(query: &str, articles: &[Article], now: DateTime<Utc>) -> FeedPage {
    let mut page = FeedPage::new("NEWS", format!("Latest on \"{}\"", query.trim()));
    add_articles(&mut page, articles, now);
    page
}

pub fn sentiment_page(query: &str, sentiment: &SentimentScore) -> FeedPage {
    let mut page = FeedPage::new("SOCIAL BUZZ", format!("Mood around \"{}\"", query.trim()));
    add_sentiment(&mut page, sentiment);
    page
}

pub fn images_page(query: &str, images: &[ImageAsset]) -> FeedPage {
    let mut page = FeedPage::new("IMAGES", format!("Media for \"{}\"", query.trim()));
    add_images(&mut page, images);
    page
}

pub fn enriched_page(query: &str, data: &EnrichedData, now: DateTime<Utc>) -> FeedPage {
    let mut page = FeedPage::new(
        "INSIGHTS",
        format!(
            "\"{}\" updated {}",
            query.trim(),
            format_relative_time(data.last_updated, now)
        ),
    );

    if data.is_fallback() {
        page.add_error_message("External data unavailable");
        page.add_blank();
    }

    page.add_heading("Social sentiment");
    add_sentiment(&mut page, &data.sentiment);
    page.add_blank();
    page.add_heading("Headlines");
    add_articles(&mut page, &data.news, now);
    page.add_heading("Images");
    add_images(&mut page, &data.images);
    page
}

/// Overview shown when no specific view is requested
pub fn dashboard_page(games: &[Game], players: &[Player], predictions: &[Prediction]) -> FeedPage {
    let mut page = FeedPage::new("GRIDIRON FEED", "Dashboard");
    let summary = PredictionSummary::from_predictions(predictions);

    page.add_heading("Your record");
    page.add_key_value(
        "Predictions",
        format!("{} ({} pending)", summary.total, summary.pending),
    );
    page.add_key_value("Accuracy", format!("{}%", summary.settled_accuracy_percent()));
    page.add_blank();

    page.add_heading("Upcoming games");
    for game in games {
        page.add_key_value(game.matchup(), format!("{} | {}", game.date, game.spread));
    }
    page.add_blank();

    page.add_heading("Top players");
    for player in players {
        page.add_colored_key_value(
            &player.name,
            format!("{:.1} pts", player.stats.projected_points),
            POINTS_FG,
        );
    }
    page
}
