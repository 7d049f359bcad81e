use super::*;
use crate::tree::TreeError;

/// Broad classes of [`GameError`], which callers map to their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Malformed input. Nothing changed.
    Validation,
    /// Legal input at the wrong time. Nothing changed.
    Sequence,
    /// No such session.
    Missing,
    /// Tree refused a stale or impossible reference. Nothing changed.
    Structure,
}

/// Failures of session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidAnswer(String),
    InvalidBranch(String),
    EmptyAnimalName,
    EmptyQuestion,
    NoActiveSession,
    UnknownSession(String),
    OutOfSequence { action: &'static str, phase: Phase },
    Tree(TreeError),
}

impl GameError {
    pub fn kind(&self) -> Kind {
        match self {
            Self::InvalidAnswer(_) => Kind::Validation,
            Self::InvalidBranch(_) => Kind::Validation,
            Self::EmptyAnimalName => Kind::Validation,
            Self::EmptyQuestion => Kind::Validation,
            Self::NoActiveSession => Kind::Missing,
            Self::UnknownSession(_) => Kind::Missing,
            Self::OutOfSequence { .. } => Kind::Sequence,
            Self::Tree(_) => Kind::Structure,
        }
    }
}

impl From<TreeError> for GameError {
    fn from(e: TreeError) -> Self {
        Self::Tree(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAnswer(s) => write!(f, "Invalid answer '{}'. Please answer with yes or no.", s),
            Self::InvalidBranch(s) => write!(f, "Invalid answer for the new animal '{}'. Please answer with yes or no.", s),
            Self::EmptyAnimalName => write!(f, "Animal name is required"),
            Self::EmptyQuestion => write!(f, "Question is required"),
            Self::NoActiveSession => write!(f, "No game in progress. Start a new game first."),
            Self::UnknownSession(s) => write!(f, "Unknown game session {}", s),
            Self::OutOfSequence { action, phase } => {
                write!(f, "Cannot {} while the game is {}", action, phase)
            }
            Self::Tree(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GameError {}
