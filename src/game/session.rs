use super::*;
use crate::ID;
use crate::stats::Game;
use crate::tree::Branch;
use crate::tree::Lesson;
use crate::tree::Node;
use crate::tree::NodeIndex;
use crate::tree::Tree;
use std::time::Instant;

/// One question taken on the way down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub question: String,
    pub answer: Branch,
}

/// A single game in progress (or just finished).
///
/// Holds a position in the shared [`Tree`] but never the tree itself; every
/// operation that needs it borrows it from the caller. The steps are an
/// append-only log, so the route stays replayable after other sessions
/// reshape the tree.
#[derive(Debug)]
pub struct Session {
    id: ID<Self>,
    cursor: NodeIndex,
    above: Option<NodeIndex>,
    current: String,
    leaf: bool,
    steps: Vec<Step>,
    phase: Phase,
    actual: Option<String>,
    started: u64,
    touched: Instant,
}

impl Session {
    /// Opens at the root. A one-leaf tree goes straight to its guess.
    pub fn start(tree: &Tree) -> Result<Self, GameError> {
        let cursor = tree.root();
        let node = tree.at(cursor)?.clone();
        let mut session = Self {
            id: ID::default(),
            cursor,
            above: None,
            current: String::new(),
            leaf: false,
            steps: Vec::new(),
            phase: Phase::Asking,
            actual: None,
            started: crate::stats::now(),
            touched: Instant::now(),
        };
        session.arrive(node);
        Ok(session)
    }
    pub fn id(&self) -> ID<Self> {
        self.id
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
    pub fn asked(&self) -> usize {
        self.steps.len()
    }
    pub fn touched(&self) -> Instant {
        self.touched
    }
    /// The animal the player says they meant, if they told us.
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }
    /// The open question, while asking.
    pub fn question(&self) -> Option<&str> {
        match self.phase {
            Phase::Asking => Some(&self.current),
            _ => None,
        }
    }
    /// The animal guessed, once a leaf was reached.
    pub fn guess(&self) -> Option<&str> {
        self.leaf.then_some(self.current.as_str())
    }
}

impl Session {
    pub fn answer(&mut self, tree: &Tree, token: &str) -> Result<(), GameError> {
        let branch = Branch::try_from(token).map_err(GameError::InvalidAnswer)?;
        self.expect(Phase::Asking, "answer a question")?;
        let next = tree.child(self.cursor, branch)?;
        let node = tree.at(next)?.clone();
        self.steps.push(Step {
            question: std::mem::take(&mut self.current),
            answer: branch,
        });
        self.above = Some(self.cursor);
        self.cursor = next;
        self.arrive(node);
        Ok(())
    }
    /// Records whether the guess was right.
    /// Returns true when the game is over, false when a lesson is expected.
    pub fn judge(&mut self, correct: bool, actual: Option<String>) -> Result<bool, GameError> {
        self.expect(Phase::Guessing, "report a guess result")?;
        self.actual = actual
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.phase = match correct {
            true => Phase::Ended(Outcome::Won),
            false => Phase::Learning,
        };
        self.touch();
        Ok(correct)
    }
    /// Teaches the tree the player's animal in place of the wrong guess.
    /// Validation happens before anything is touched.
    pub fn learn(
        &mut self,
        tree: &mut Tree,
        animal: &str,
        question: &str,
        branch: &str,
    ) -> Result<NodeIndex, GameError> {
        let animal = animal.trim();
        let question = question.trim();
        if animal.is_empty() {
            return Err(GameError::EmptyAnimalName);
        }
        if question.is_empty() {
            return Err(GameError::EmptyQuestion);
        }
        let branch = Branch::try_from(branch).map_err(GameError::InvalidBranch)?;
        self.expect(Phase::Learning, "learn a new animal")?;
        let lesson = Lesson::new(animal, question, branch);
        let node = tree.learn(self.cursor, self.above, lesson)?;
        self.actual = Some(animal.to_string());
        self.phase = Phase::Ended(Outcome::Taught);
        self.touch();
        Ok(node)
    }
    /// Closes the session. Ending twice is harmless.
    /// Returns true only for the call that closed it.
    pub fn end(&mut self) -> bool {
        if self.phase.is_ended() {
            return false;
        }
        self.phase = match self.phase {
            Phase::Asking => Phase::Ended(Outcome::Abandoned),
            Phase::Guessing => Phase::Ended(Outcome::Abandoned),
            Phase::Learning => Phase::Ended(Outcome::Missed),
            ended => ended,
        };
        self.touch();
        true
    }
    pub fn correct(&self) -> bool {
        self.phase == Phase::Ended(Outcome::Won)
    }
    /// The log entry for a judged game. Abandoned and open games have none.
    pub fn record(&self) -> Option<Game> {
        let learned = match self.phase {
            Phase::Ended(Outcome::Won) | Phase::Ended(Outcome::Missed) => false,
            Phase::Ended(Outcome::Taught) => true,
            _ => return None,
        };
        Some(Game {
            questions_asked: self.asked(),
            started_at: self.started,
            ended_at: crate::stats::now(),
            guessed_correctly: self.correct(),
            animal_guessed: self.guess()?.to_string(),
            animal_actual: self.actual.clone(),
            learned_new_animal: learned,
        })
    }
}

impl Session {
    fn arrive(&mut self, node: Node) {
        self.leaf = node.is_leaf();
        self.phase = match self.leaf {
            true => Phase::Guessing,
            false => Phase::Asking,
        };
        self.current = match node {
            Node::Question(text) => text,
            Node::Leaf(animal) => animal,
        };
        self.touch();
    }
    fn expect(&self, phase: Phase, action: &'static str) -> Result<(), GameError> {
        match self.phase == phase {
            true => Ok(()),
            false => Err(GameError::OutOfSequence {
                action,
                phase: self.phase,
            }),
        }
    }
    fn touch(&mut self) {
        self.touched = Instant::now();
    }
}
