/// How a finished game went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess was right.
    Won,
    /// The guess was wrong and the player taught a new animal.
    Taught,
    /// The guess was wrong and the player left without teaching.
    Missed,
    /// The player left before the guess was judged.
    Abandoned,
}

/// Where a session stands.
///
/// ```text
/// Asking ──answer──▶ Asking | Guessing
/// Guessing ──judge(true)──▶ Ended(Won)
/// Guessing ──judge(false)──▶ Learning ──learn──▶ Ended(Taught)
/// any ──end──▶ Ended(..)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Asking,
    Guessing,
    Learning,
    Ended(Outcome),
}

impl Phase {
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asking => write!(f, "awaiting an answer"),
            Self::Guessing => write!(f, "awaiting the guess result"),
            Self::Learning => write!(f, "awaiting a new animal"),
            Self::Ended(_) => write!(f, "ended"),
        }
    }
}
