use crate::game::GameError;
use crate::game::Phase;
use crate::game::Session;
use serde::Serialize;

/// One line of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub question: String,
    /// "Yes" or "No" for questions, "Guess" for the final guess.
    pub answer: &'static str,
}

/// The route one session took, read from its own log.
/// Later lessons by other sessions cannot change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Replay(Vec<Entry>);

impl Replay {
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }
}

impl TryFrom<&Session> for Replay {
    type Error = GameError;
    fn try_from(session: &Session) -> Result<Self, Self::Error> {
        if session.phase() == Phase::Asking {
            return Err(GameError::OutOfSequence {
                action: "replay the path",
                phase: session.phase(),
            });
        }
        let steps = session.steps().iter().map(|step| Entry {
            question: step.question.clone(),
            answer: step.answer.label(),
        });
        let guess = session.guess().map(|animal| Entry {
            question: format!("Is it a {}?", animal),
            answer: "Guess",
        });
        Ok(Self(steps.chain(guess).collect()))
    }
}
