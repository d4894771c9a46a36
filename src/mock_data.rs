//! Fixed mock data backing the dashboard views.
//!
//! Games, predictions and the leaderboard are static. The player roster is
//! described as templates so the simulated stats feed can perturb it.

use crate::models::{
    Game, LeaderboardEntry, Player, PlayerStats, Prediction, PredictionResult,
};

/// Base statistic plus the width of its random integer bump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YardageTemplate {
    pub base: u32,
    pub jitter: u32,
}

/// A roster player before the stats feed perturbs it
#[derive(Debug, Clone, PartialEq)]
pub struct RosterTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub team: &'static str,
    pub pass_yards: Option<YardageTemplate>,
    pub rush_yards: Option<YardageTemplate>,
    pub receiving_yards: Option<YardageTemplate>,
    pub touchdowns: u32,
    pub projected_points: f64,
}

impl RosterTemplate {
    /// The unperturbed player
    pub fn to_player(&self) -> Player {
        Player {
            id: self.id.to_string(),
            name: self.name.to_string(),
            position: self.position.to_string(),
            team: self.team.to_string(),
            stats: PlayerStats {
                pass_yards: self.pass_yards.map(|y| y.base),
                rush_yards: self.rush_yards.map(|y| y.base),
                receiving_yards: self.receiving_yards.map(|y| y.base),
                touchdowns: Some(self.touchdowns),
                projected_points: self.projected_points,
            },
        }
    }
}

const fn yards(base: u32, jitter: u32) -> Option<YardageTemplate> {
    Some(YardageTemplate { base, jitter })
}

/// Roster served by the simulated player stats feed
pub fn roster_templates() -> Vec<RosterTemplate> {
    vec![
        RosterTemplate {
            id: "player1",
            name: "Patrick Mahomes",
            position: "QB",
            team: "KC",
            pass_yards: yards(335, 50),
            rush_yards: None,
            receiving_yards: None,
            touchdowns: 3,
            projected_points: 24.6,
        },
        RosterTemplate {
            id: "player2",
            name: "Christian McCaffrey",
            position: "RB",
            team: "SF",
            pass_yards: None,
            rush_yards: yards(128, 30),
            receiving_yards: yards(42, 20),
            touchdowns: 2,
            projected_points: 22.8,
        },
        RosterTemplate {
            id: "player3",
            name: "Justin Jefferson",
            position: "WR",
            team: "MIN",
            pass_yards: None,
            rush_yards: None,
            receiving_yards: yards(156, 40),
            touchdowns: 1,
            projected_points: 19.7,
        },
        RosterTemplate {
            id: "player4",
            name: "Travis Kelce",
            position: "TE",
            team: "KC",
            pass_yards: None,
            rush_yards: None,
            receiving_yards: yards(78, 30),
            touchdowns: 1,
            projected_points: 16.2,
        },
        RosterTemplate {
            id: "player5",
            name: "Jalen Hurts",
            position: "QB",
            team: "PHI",
            pass_yards: yards(267, 40),
            rush_yards: yards(45, 20),
            receiving_yards: None,
            touchdowns: 2,
            projected_points: 20.5,
        },
    ]
}

/// Number of players highlighted on the dashboard
const TOP_PLAYER_COUNT: usize = 3;

pub fn upcoming_games() -> Vec<Game> {
    let game = |id: &str, home: &str, away: &str, date: &str, time: &str, spread: &str, count| Game {
        id: id.to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        spread: spread.to_string(),
        predictions_count: count,
    };

    vec![
        game("game1", "Chiefs", "Ravens", "Sun, Oct 8", "8:20 PM ET", "KC -3.5", 1247),
        game("game2", "Cowboys", "49ers", "Mon, Oct 9", "7:15 PM ET", "SF -1.5", 982),
        game("game3", "Bills", "Bengals", "Sun, Oct 8", "1:00 PM ET", "BUF -2.5", 873),
        game("game4", "Eagles", "Rams", "Sun, Oct 8", "4:25 PM ET", "PHI -4.0", 741),
    ]
}

pub fn top_players() -> Vec<Player> {
    roster_templates()
        .iter()
        .take(TOP_PLAYER_COUNT)
        .map(RosterTemplate::to_player)
        .collect()
}

pub fn user_predictions() -> Vec<Prediction> {
    let prediction = |id: &str, game: &str, text: &str, result, date: &str| Prediction {
        id: id.to_string(),
        game: game.to_string(),
        prediction: text.to_string(),
        result,
        date: date.to_string(),
    };

    vec![
        prediction("pred1", "Bills vs. Jets", "Bills -3.5", PredictionResult::Correct, "Oct 2"),
        prediction("pred2", "Packers vs. Lions", "Over 47.5", PredictionResult::Incorrect, "Oct 1"),
        prediction("pred3", "Chiefs vs. Ravens", "Chiefs ML", PredictionResult::Pending, "Oct 8"),
        prediction("pred4", "Cowboys vs. 49ers", "49ers -1.5", PredictionResult::Pending, "Oct 9"),
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    let entry = |id: &str, username: &str, correct, total, streak| LeaderboardEntry {
        id: id.to_string(),
        username: username.to_string(),
        avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={username}"),
        correct_predictions: correct,
        total_predictions: total,
        win_streak: streak,
    };

    vec![
        entry("user1", "PredictionKing", 87, 112, 5),
        entry("user2", "FootballGuru", 79, 105, 3),
        entry("user3", "SportsBettor", 73, 98, 0),
        entry("user4", "GridironGambler", 67, 94, 2),
        entry("user5", "NFLExpert", 58, 89, 1),
    ]
}
