use super::*;
use crate::ID;
use serde::Serialize;

/// What a player sees after starting or answering: the next question, or the guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub session_id: ID<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<String>,
    pub questions_asked: usize,
    pub reached_guess: bool,
}

impl From<&Session> for Turn {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id(),
            question: session.question().map(String::from),
            guess: session.guess().map(String::from),
            questions_asked: session.asked(),
            reached_guess: session.guess().is_some(),
        }
    }
}

/// How a session closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub questions_asked: usize,
    pub correct: bool,
}

impl From<&Session> for Summary {
    fn from(session: &Session) -> Self {
        Self {
            questions_asked: session.asked(),
            correct: session.correct(),
        }
    }
}

/// A lesson that took effect. `warning` is set when it could not be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Learned {
    pub animal: String,
    pub warning: Option<String>,
}
