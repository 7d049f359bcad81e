use super::*;
use crate::tree::Metrics;
use serde::Serialize;

/// Game outcome figures as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Games {
    pub total: u64,
    pub correct_guesses: u64,
    pub incorrect_guesses: u64,
    pub success_rate: f64,
    #[serde(serialize_with = "crate::rounded")]
    pub average_questions_per_game: f64,
}

impl From<Tally> for Games {
    fn from(tally: Tally) -> Self {
        Self {
            total: tally.games_total,
            correct_guesses: tally.correct_guesses,
            incorrect_guesses: tally.incorrect_guesses,
            success_rate: tally.success_rate(),
            average_questions_per_game: tally.average_questions(),
        }
    }
}

/// Tree shape and game outcomes read together for the statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub tree: Metrics,
    pub games: Games,
}
