use super::*;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Thread-safe game outcome counters.
///
/// One short lock per update keeps the four counters in step with each other,
/// so a snapshot never shows more outcomes than games.
#[derive(Debug, Default)]
pub struct Statistics(Mutex<Tally>);

impl Statistics {
    pub fn record(&self, correct: bool, asked: usize) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(correct, asked);
    }
    pub fn tally(&self) -> Tally {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
    pub fn games(&self) -> Games {
        Games::from(self.tally())
    }
}

impl From<Tally> for Statistics {
    fn from(tally: Tally) -> Self {
        Self(Mutex::new(tally))
    }
}
