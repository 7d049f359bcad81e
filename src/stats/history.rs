use serde::Deserialize;
use serde::Serialize;

/// One finished, judged game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub questions_asked: usize,
    /// Unix seconds.
    pub started_at: u64,
    /// Unix seconds.
    pub ended_at: u64,
    pub guessed_correctly: bool,
    pub animal_guessed: String,
    pub animal_actual: Option<String>,
    pub learned_new_animal: bool,
}

/// Append-only log of finished games, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Game>);

impl History {
    pub fn push(&mut self, game: Game) {
        self.0.push(game);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The last `n` games, newest last.
    pub fn recent(&self, n: usize) -> &[Game] {
        &self.0[self.0.len().saturating_sub(n)..]
    }
}

impl Extend<Game> for History {
    fn extend<I: IntoIterator<Item = Game>>(&mut self, games: I) {
        self.0.extend(games);
    }
}

/// Seconds since the unix epoch, zero if the clock is before it.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
