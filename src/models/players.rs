use serde::{Deserialize, Serialize};

/// Per-category statistics of a player. Only `projected_points` is present for
/// every position; yardage and touchdowns depend on the role.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_yards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rush_yards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_yards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touchdowns: Option<u32>,
    pub projected_points: f64,
}

impl PlayerStats {
    /// Total yards across all categories the player has
    pub fn total_yards(&self) -> u32 {
        self.pass_yards.unwrap_or(0)
            + self.rush_yards.unwrap_or(0)
            + self.receiving_yards.unwrap_or(0)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub stats: PlayerStats,
}

impl Player {
    /// Returns a copy of this player with different projected points
    pub fn with_projected_points(&self, projected_points: f64) -> Self {
        Player {
            stats: PlayerStats {
                projected_points,
                ..self.stats.clone()
            },
            ..self.clone()
        }
    }
}
