use serde::Deserialize;
use serde::Serialize;

/// Durable game counters.
/// `questions_asked` is the running sum behind the per-game average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub games_total: u64,
    pub correct_guesses: u64,
    pub incorrect_guesses: u64,
    pub questions_asked: u64,
}

impl Tally {
    pub fn add(&mut self, correct: bool, asked: usize) {
        self.games_total += 1;
        self.questions_asked += asked as u64;
        match correct {
            true => self.correct_guesses += 1,
            false => self.incorrect_guesses += 1,
        }
    }
    /// Percentage of games won, 0 before any game.
    pub fn success_rate(&self) -> f64 {
        match self.games_total {
            0 => 0.,
            n => self.correct_guesses as f64 / n as f64 * 100.,
        }
    }
    pub fn average_questions(&self) -> f64 {
        match self.games_total {
            0 => 0.,
            n => self.questions_asked as f64 / n as f64,
        }
    }
}
