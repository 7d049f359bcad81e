use crate::display::Replay;
use crate::game::Summary;
use crate::game::Turn;
use crate::stats::Game;
use crate::stats::Report;
use crate::tree::Shape;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Started {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub turn: Turn,
}

#[derive(Debug, Serialize)]
pub struct Answered {
    pub success: bool,
    #[serde(flatten)]
    pub turn: Turn,
}

#[derive(Debug, Serialize)]
pub struct Judged {
    pub success: bool,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Taught {
    pub success: bool,
    pub message: String,
    pub tree_updated: bool,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Ended {
    pub success: bool,
    pub session: Summary,
}

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub success: bool,
    pub statistics: Report,
}

#[derive(Debug, Serialize)]
pub struct Animals {
    pub success: bool,
    pub count: usize,
    pub animals: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Path {
    pub success: bool,
    pub path: Replay,
}

#[derive(Debug, Serialize)]
pub struct Data {
    pub success: bool,
    pub tree: Shape,
}

#[derive(Debug, Serialize)]
pub struct Recent {
    pub success: bool,
    pub count: usize,
    pub games: Vec<Game>,
}

#[derive(Debug, Serialize)]
pub struct Drawing {
    pub success: bool,
    pub tree: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body of every refused request.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub message: String,
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
