use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::models::ImageKind;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// The feed view selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Games,
    Players,
    Predictions,
    Leaderboard,
    Live,
    News(String),
    Sentiment(String),
    Images(String),
    Enrich(String),
}

impl View {
    /// Whether the view reads from the scraping service rather than mock data
    pub fn is_scraped(&self) -> bool {
        matches!(
            self,
            View::News(_) | View::Sentiment(_) | View::Images(_) | View::Enrich(_)
        )
    }
}

/// Config operations are handled before any service is built
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Gridiron Feed
///
/// Fantasy football companion for the terminal. Shows upcoming games,
/// projected player stats, your prediction record and the leaderboard, and
/// gathers simulated news, social sentiment and images for any search term.
///
/// Without a view flag a dashboard overview is printed. All data is
/// simulated: fetches take a moment and results are cached for a while
/// (player stats 5 minutes, scraped data 15 minutes).
#[derive(Parser, Debug, Default)]
#[command(author = "Gridiron Feed contributors", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show upcoming games with spreads and prediction counts
    #[arg(long = "games", short = 'g', help_heading = "Views")]
    pub games: bool,

    /// Show the top players with their projected points
    #[arg(long = "players", short = 'p', help_heading = "Views")]
    pub players: bool,

    /// Show your predictions and accuracy summary
    #[arg(long = "predictions", help_heading = "Views")]
    pub predictions: bool,

    /// Show the prediction leaderboard
    #[arg(long = "leaderboard", help_heading = "Views")]
    pub leaderboard: bool,

    /// Run the live stats pipeline (scrape, fetch, predict) and show the results
    #[arg(long = "live", help_heading = "Views")]
    pub live: bool,

    /// Show news articles about a player or team, best matches first
    #[arg(long = "news", value_name = "QUERY", help_heading = "Views")]
    pub news: Option<String>,

    /// Show social media sentiment for a player or team
    #[arg(long = "sentiment", value_name = "QUERY", help_heading = "Views")]
    pub sentiment: Option<String>,

    /// Show images for a player, team or game
    #[arg(long = "images", value_name = "QUERY", help_heading = "Views")]
    pub images: Option<String>,

    /// Gather news, sentiment and images for a query in one go
    #[arg(long = "enrich", value_name = "QUERY", help_heading = "Views")]
    pub enrich: Option<String>,

    /// Kind of subject searched with --images
    #[arg(
        long = "image-type",
        value_enum,
        default_value_t = ImageKind::Player,
        help_heading = "Options"
    )]
    pub image_type: ImageKind,

    /// Maximum number of news articles or images to show
    #[arg(long = "limit", short = 'n', help_heading = "Options")]
    pub limit: Option<usize>,

    /// Ignore cached data and fetch fresh results
    #[arg(long = "refresh", short = 'r', help_heading = "Options")]
    pub refresh: bool,

    /// Print results as JSON instead of styled text
    #[arg(long = "json", help_heading = "Options")]
    pub json: bool,

    /// Seed the random source for reproducible output. Overrides the config file.
    #[arg(long = "seed", help_heading = "Options")]
    pub seed: Option<u64>,

    /// Skip simulated network latency
    #[arg(long = "instant", help_heading = "Options")]
    pub instant: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode. Logs are written to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Every view flag that was given, in declaration order
    pub fn requested_views(&self) -> Vec<View> {
        let flags = [
            (self.games, View::Games),
            (self.players, View::Players),
            (self.predictions, View::Predictions),
            (self.leaderboard, View::Leaderboard),
            (self.live, View::Live),
        ];
        let queries = [
            self.news.clone().map(View::News),
            self.sentiment.clone().map(View::Sentiment),
            self.images.clone().map(View::Images),
            self.enrich.clone().map(View::Enrich),
        ];

        flags
            .into_iter()
            .filter_map(|(set, view)| set.then_some(view))
            .chain(queries.into_iter().flatten())
            .collect()
    }
}
