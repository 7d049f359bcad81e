use crate::ID;
use crate::game::Session;
use serde::Deserialize;

/// `?session_id=` on any game route. Absent means the latest session.
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<uuid::Uuid>,
}

impl SessionQuery {
    pub fn id(&self) -> Option<ID<Session>> {
        self.session_id.map(ID::from)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessResult {
    pub was_correct: bool,
    #[serde(default)]
    pub actual_animal: Option<String>,
}

/// Missing fields read as empty so they fail validation with a message.
#[derive(Debug, Deserialize)]
pub struct LearnRequest {
    #[serde(default)]
    pub new_animal: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer_for_new: String,
}
