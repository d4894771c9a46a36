use serde::{Deserialize, Serialize};

/// An upcoming game open for predictions
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub date: String,
    pub time: String,
    pub spread: String,
    pub predictions_count: u32,
}

impl Game {
    /// Matchup label in the "Home vs Away" form used for image queries
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
