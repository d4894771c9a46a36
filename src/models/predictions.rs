use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PredictionResult {
    Correct,
    Incorrect,
    Pending,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Prediction {
    pub id: String,
    pub game: String,
    pub prediction: String,
    pub result: PredictionResult,
    pub date: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub correct_predictions: u32,
    pub total_predictions: u32,
    pub win_streak: u32,
}

impl LeaderboardEntry {
    /// Share of correct predictions as a rounded percentage, 0 without predictions
    pub fn accuracy_percent(&self) -> u32 {
        rounded_percent(self.correct_predictions, self.total_predictions)
    }
}

/// Aggregate counts over a user's predictions
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub pending: u32,
}

impl PredictionSummary {
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        predictions
            .iter()
            .fold(PredictionSummary::default(), |mut summary, prediction| {
                summary.total += 1;
                match prediction.result {
                    PredictionResult::Correct => summary.correct += 1,
                    PredictionResult::Incorrect => summary.incorrect += 1,
                    PredictionResult::Pending => summary.pending += 1,
                }
                summary
            })
    }

    /// Correct predictions over all predictions, pending ones included
    pub fn accuracy_percent(&self) -> u32 {
        rounded_percent(self.correct, self.total)
    }

    /// Correct predictions over settled (correct or incorrect) predictions
    pub fn settled_accuracy_percent(&self) -> u32 {
        rounded_percent(self.correct, self.correct + self.incorrect)
    }
}

fn rounded_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}
