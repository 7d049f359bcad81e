use super::Branch;

/// What a player teaches after a wrong guess: the animal they had in mind,
/// a question telling it apart from the guess, and the answer for their animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub animal: String,
    pub question: String,
    pub branch: Branch,
}

impl Lesson {
    pub fn new(animal: impl Into<String>, question: impl Into<String>, branch: Branch) -> Self {
        Self {
            animal: animal.into(),
            question: question.into(),
            branch,
        }
    }
}
