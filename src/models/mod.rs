pub mod games;
pub mod players;
pub mod predictions;
pub mod scraped;

pub use games::Game;
pub use players::{Player, PlayerStats};
pub use predictions::{LeaderboardEntry, Prediction, PredictionResult, PredictionSummary};
pub use scraped::{Article, EnrichedData, ImageAsset, ImageKind, SentimentScore};
