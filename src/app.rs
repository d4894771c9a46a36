use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::cli::{Args, View};
use crate::config::Config;
use crate::display::{self, FeedPage, views};
use crate::error::AppError;
use crate::mock_data;
use crate::models::{Game, Player, Prediction, PredictionSummary, SentimentScore};
use crate::services::Services;
use crate::services::notifier::{CollectingNotifier, Notice, Notifier};
use crate::services::scraping::{ImageOptions, NewsOptions};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardJson<'a> {
    upcoming_games: &'a [Game],
    top_players: &'a [Player],
    summary: PredictionSummary,
}

#[derive(Serialize)]
struct PredictionsJson<'a> {
    predictions: &'a [Prediction],
    summary: PredictionSummary,
}

#[derive(Serialize)]
struct ErrorJson<'a> {
    error: &'a str,
}

/// One CLI session: the service graph plus the notices raised while
/// running a view.
#[derive(Debug)]
pub struct App {
    services: Services,
    notifier: Arc<CollectingNotifier>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let notifier = Arc::new(CollectingNotifier::new());
        let services = Services::from_config(config, notifier.clone());
        App { services, notifier }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Notices raised since the last call
    pub fn take_notices(&self) -> Vec<Notice> {
        self.notifier.drain()
    }

    /// Renders `view` into `out` as styled text or JSON.
    ///
    /// Invalid queries are reported as notices and shown in place of the
    /// data. A failed news, sentiment or image scrape renders an empty or
    /// neutral result instead. Other errors are returned.
    #[instrument(skip(self, args, out))]
    pub async fn run<W: Write>(&self, view: &View, args: &Args, out: &mut W) -> Result<(), AppError> {
        let now = Utc::now();

        match view {
            View::Dashboard => {
                let games = mock_data::upcoming_games();
                let players = mock_data::top_players();
                let predictions = mock_data::user_predictions();
                if args.json {
                    display::write_json(
                        out,
                        &DashboardJson {
                            upcoming_games: &games,
                            top_players: &players,
                            summary: PredictionSummary::from_predictions(&predictions),
                        },
                    )
                } else {
                    views::dashboard_page(&games, &players, &predictions).render(out)
                }
            }
            View::Games => {
                let games = mock_data::upcoming_games();
                if args.json {
                    display::write_json(out, &games)
                } else {
                    views::games_page(&games).render(out)
                }
            }
            View::Players => {
                let players = mock_data::top_players();
                if args.json {
                    display::write_json(out, &players)
                } else {
                    views::players_page("TOP PLAYERS", &players).render(out)
                }
            }
            View::Predictions => {
                let predictions = mock_data::user_predictions();
                if args.json {
                    display::write_json(
                        out,
                        &PredictionsJson {
                            predictions: &predictions,
                            summary: PredictionSummary::from_predictions(&predictions),
                        },
                    )
                } else {
                    views::predictions_page(&predictions).render(out)
                }
            }
            View::Leaderboard => {
                let entries = mock_data::leaderboard();
                if args.json {
                    display::write_json(out, &entries)
                } else {
                    views::leaderboard_page(&entries).render(out)
                }
            }
            View::Live => self.run_live(args, out).await,
            View::News(query) => {
                let options = NewsOptions {
                    refresh: args.refresh,
                    limit: args.limit.unwrap_or(NewsOptions::default().limit),
                };
                let result = self.degrade(
                    self.services.scraping.scrape_news_articles(query, options).await,
                    Some("Failed to retrieve latest news"),
                    Vec::new,
                );
                match result {
                    Ok(articles) if args.json => display::write_json(out, &articles),
                    Ok(articles) => views::news_page(query, &articles, now).render(out),
                    Err(e) => self.report_failure(e, args, "NEWS", out),
                }
            }
            View::Sentiment(query) => {
                let result = self.degrade(
                    self.services
                        .scraping
                        .scrape_social_sentiment(query, args.refresh)
                        .await,
                    None,
                    SentimentScore::neutral,
                );
                match result {
                    Ok(sentiment) if args.json => display::write_json(out, &sentiment),
                    Ok(sentiment) => views::sentiment_page(query, &sentiment).render(out),
                    Err(e) => self.report_failure(e, args, "SOCIAL BUZZ", out),
                }
            }
            View::Images(query) => {
                let options = ImageOptions {
                    refresh: args.refresh,
                    limit: args.limit.unwrap_or(ImageOptions::default().limit),
                    kind: args.image_type,
                };
                let result = self.degrade(
                    self.services.scraping.scrape_images(query, options).await,
                    Some("Failed to retrieve images"),
                    Vec::new,
                );
                match result {
                    Ok(images) if args.json => display::write_json(out, &images),
                    Ok(images) => views::images_page(query, &images).render(out),
                    Err(e) => self.report_failure(e, args, "IMAGES", out),
                }
            }
            View::Enrich(query) => {
                let data = self
                    .services
                    .scraping
                    .enrich_data_with_scraped_sources(query)
                    .await;
                if args.json {
                    display::write_json(out, &data)
                } else {
                    views::enriched_page(query, &data, now).render(out)
                }
            }
        }
    }

    /// Runs the stats pipeline. A failed stage is logged, reported as a
    /// notice and shown on the page.
    async fn run_live<W: Write>(&self, args: &Args, out: &mut W) -> Result<(), AppError> {
        let result = self.services.pipeline.run_data_pipeline().await;

        match &result {
            Ok(players) => {
                info!("Live stats refreshed for {} players", players.len());
                self.notifier.notify(Notice::success("Player stats updated"));
            }
            Err(e) => {
                error!("Live stats update failed: {}", e);
                self.notifier.notify(Notice::error("Failed to update player stats"));
            }
        }

        if args.json {
            return match result {
                Ok(players) => display::write_json(out, &players),
                Err(e) => display::write_json(out, &ErrorJson { error: &e.to_string() }),
            };
        }

        let shown = result.map_err(|e| e.to_string());
        views::live_stats_page(&shown, Utc::now()).render(out)
    }

    /// Swaps a simulated fetch failure for `empty`, raising `notice` if given.
    /// Any other error is passed through.
    fn degrade<T>(
        &self,
        result: Result<T, AppError>,
        notice: Option<&str>,
        empty: impl FnOnce() -> T,
    ) -> Result<T, AppError> {
        match result {
            Err(e) if e.is_fetch_failure() => {
                warn!("Showing empty result: {}", e);
                if let Some(message) = notice {
                    self.notifier.notify(Notice::error(message));
                }
                Ok(empty())
            }
            other => other,
        }
    }

    fn report_failure<W: Write>(
        &self,
        error: AppError,
        args: &Args,
        title: &str,
        out: &mut W,
    ) -> Result<(), AppError> {
        if !error.is_validation() {
            return Err(error);
        }

        error!("{} view failed: {}", title, error);
        let message = error.user_message();
        self.notifier.notify(Notice::error(message));

        if args.json {
            display::write_json(out, &ErrorJson { error: message })
        } else {
            let mut page = FeedPage::new(title, "Unavailable");
            page.add_error_message(message);
            page.render(out)
        }
    }
}
