use super::*;
use crate::ID;
use crate::display::Render;
use crate::display::Replay;
use crate::save::Store;
use crate::stats::Game;
use crate::stats::History;
use crate::stats::Report;
use crate::stats::Statistics;
use crate::tree::Shape;
use crate::tree::Snapshot;
use crate::tree::Tree;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// Shared game state for every player: one tree, one set of counters,
/// and a table of sessions keyed by token.
///
/// Locks are always taken session first, then tree. A lesson holds the
/// tree exclusively for the rewire alone; writing it out happens after.
/// Writers to disk take `flush` before the tree, the counters or the log.
pub struct Engine {
    tree: RwLock<Tree>,
    stats: Statistics,
    sessions: RwLock<HashMap<ID<Session>, Arc<Mutex<Session>>>>,
    latest: RwLock<Option<ID<Session>>>,
    store: Store,
    history: Mutex<History>,
    flush: Mutex<()>,
    ttl: Duration,
    cap: usize,
}

impl Engine {
    /// Hydrates from `store`, planting `seed` when nothing was saved yet.
    pub fn new(store: Store, ttl: Duration, seed: impl FnOnce() -> Tree) -> anyhow::Result<Self> {
        let tree = store.tree(seed)?;
        let tally = store.tally()?;
        let history = store.history()?;
        log::info!(
            "engine ready with {} animals and {} recorded games ({} logged)",
            tree.metrics().leaf_count,
            tally.games_total,
            history.len()
        );
        Ok(Self {
            tree: RwLock::new(tree),
            stats: Statistics::from(tally),
            sessions: RwLock::new(HashMap::new()),
            latest: RwLock::new(None),
            store,
            history: Mutex::new(history),
            flush: Mutex::new(()),
            ttl,
            cap: crate::MAX_SESSIONS,
        })
    }
    /// In-memory engine over `tree`, for tests and throwaway games.
    pub fn memory(tree: Tree) -> Self {
        Self {
            tree: RwLock::new(tree),
            stats: Statistics::default(),
            sessions: RwLock::new(HashMap::new()),
            latest: RwLock::new(None),
            store: Store::memory(),
            history: Mutex::new(History::default()),
            flush: Mutex::new(()),
            ttl: Duration::from_secs(crate::SESSION_TTL),
            cap: crate::MAX_SESSIONS,
        }
    }
    /// Keeps at most `cap` sessions live, evicting the least recently touched.
    pub fn capped(self, cap: usize) -> Self {
        Self { cap: cap.max(1), ..self }
    }
}

impl Engine {
    pub async fn start(&self) -> Result<Turn, GameError> {
        self.sweep().await;
        let session = Session::start(&*self.tree.read().await)?;
        let id = session.id();
        let turn = Turn::from(&session);
        let mut sessions = self.sessions.write().await;
        let evicted = match sessions.len() >= self.cap {
            true => Self::stalest(&sessions).and_then(|old| sessions.remove(&old)),
            false => None,
        };
        sessions.insert(id, Arc::new(Mutex::new(session)));
        *self.latest.write().await = Some(id);
        log::debug!("started session {} ({} live)", id, sessions.len());
        drop(sessions);
        if let Some(evicted) = evicted {
            let mut evicted = evicted.lock().await;
            log::debug!("evicted session {} at the {} session cap", evicted.id(), self.cap);
            if evicted.end() {
                self.chronicle(evicted.record()).await;
            }
        }
        Ok(turn)
    }
    pub async fn answer(&self, id: Option<ID<Session>>, token: &str) -> Result<Turn, GameError> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        session.answer(&*self.tree.read().await, token)?;
        log::debug!("session {} answered {:?}", session.id(), token);
        Ok(Turn::from(&*session))
    }
    /// Scores the guess. Returns a warning if the counters or the game log
    /// could not be saved.
    pub async fn judge(
        &self,
        id: Option<ID<Session>>,
        correct: bool,
        actual: Option<String>,
    ) -> Result<Option<String>, GameError> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        session.judge(correct, actual)?;
        self.stats.record(correct, session.asked());
        match (correct, session.actual()) {
            (true, _) => log::info!("guessed {} after {} questions", session.guess().unwrap_or_default(), session.asked()),
            (false, Some(actual)) => log::info!("guessed {} but it was {}", session.guess().unwrap_or_default(), actual),
            (false, None) => log::info!("guessed {} and missed", session.guess().unwrap_or_default()),
        }
        let warning = self.count().await;
        Ok(warning.or(self.chronicle(session.record()).await))
    }
    pub async fn learn(
        &self,
        id: Option<ID<Session>>,
        animal: &str,
        question: &str,
        branch: &str,
    ) -> Result<Learned, GameError> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        session.learn(&mut *self.tree.write().await, animal, question, branch)?;
        let animal = session.actual().unwrap_or(animal).to_string();
        log::info!("learned {} from session {}", animal, session.id());
        let warning = self.keep().await;
        let warning = warning.or(self.chronicle(session.record()).await);
        Ok(Learned { animal, warning })
    }
    pub async fn end(&self, id: Option<ID<Session>>) -> Result<Summary, GameError> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        if session.end() {
            self.chronicle(session.record()).await;
        }
        log::debug!("ended session {} ({})", session.id(), session.phase());
        Ok(Summary::from(&*session))
    }
    pub async fn path(&self, id: Option<ID<Session>>) -> Result<Replay, GameError> {
        let session = self.session(id).await?;
        let session = session.lock().await;
        Replay::try_from(&*session)
    }
}

impl Engine {
    pub async fn report(&self) -> Report {
        Report {
            tree: self.tree.read().await.metrics(),
            games: self.stats.games(),
        }
    }
    pub async fn animals(&self) -> Vec<String> {
        self.tree.read().await.animals()
    }
    pub async fn shape(&self) -> Result<Shape, GameError> {
        Ok(Shape::try_from(&*self.tree.read().await)?)
    }
    pub async fn render(&self) -> String {
        Render(&*self.tree.read().await).to_string()
    }
    /// The last `n` finished games, newest last.
    pub async fn history(&self, n: usize) -> Vec<Game> {
        self.history.lock().await.recent(n).to_vec()
    }
    #[cfg(test)]
    async fn live(&self) -> usize {
        self.sessions.read().await.len()
    }
    /// Drops sessions idle for longer than the ttl. Sessions busy in
    /// another request are left for the next sweep. A player who left
    /// mid-lesson still lands in the game log.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut missed = Vec::new();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(session) if now.duration_since(session.touched()) < self.ttl => true,
            Ok(mut session) => {
                if session.end() {
                    missed.extend(session.record());
                }
                false
            }
            Err(_) => true,
        });
        let evicted = before - sessions.len();
        let mut latest = self.latest.write().await;
        if latest.is_some_and(|id| !sessions.contains_key(&id)) {
            *latest = None;
        }
        if evicted > 0 {
            log::debug!("evicted {} idle sessions ({} live)", evicted, sessions.len());
        }
        drop(latest);
        drop(sessions);
        self.chronicle(missed).await;
        evicted
    }
}

impl Engine {
    /// The least recently touched session not busy in another request.
    fn stalest(sessions: &HashMap<ID<Session>, Arc<Mutex<Session>>>) -> Option<ID<Session>> {
        sessions
            .iter()
            .filter_map(|(id, session)| session.try_lock().ok().map(|s| (*id, s.touched())))
            .min_by_key(|(_, touched)| *touched)
            .map(|(id, _)| id)
    }
    /// An explicit token must exist. Without one, the latest session stands in.
    async fn session(&self, id: Option<ID<Session>>) -> Result<Arc<Mutex<Session>>, GameError> {
        let sessions = self.sessions.read().await;
        match id {
            Some(id) => sessions
                .get(&id)
                .cloned()
                .ok_or_else(|| GameError::UnknownSession(id.to_string())),
            None => self
                .latest
                .read()
                .await
                .and_then(|id| sessions.get(&id).cloned())
                .ok_or(GameError::NoActiveSession),
        }
    }
    /// Writes the tree as it stands once the flush lock is ours,
    /// so the last writer always writes the newest tree.
    async fn keep(&self) -> Option<String> {
        let _flush = self.flush.lock().await;
        let snapshot = Snapshot::from(&*self.tree.read().await);
        self.store
            .keep(&snapshot)
            .inspect_err(|e| log::error!("failed to save tree: {:#}", e))
            .err()
            .map(|e| format!("Tree updated in memory but not saved: {}", e))
    }
    async fn count(&self) -> Option<String> {
        let _flush = self.flush.lock().await;
        let tally = self.stats.tally();
        self.store
            .count(&tally)
            .inspect_err(|e| log::error!("failed to save statistics: {:#}", e))
            .err()
            .map(|e| format!("Result recorded in memory but not saved: {}", e))
    }
    async fn chronicle(&self, games: impl IntoIterator<Item = Game>) -> Option<String> {
        let _flush = self.flush.lock().await;
        let mut history = self.history.lock().await;
        let before = history.len();
        history.extend(games);
        if history.len() == before {
            return None;
        }
        self.store
            .journal(&history)
            .inspect_err(|e| log::error!("failed to save game log: {:#}", e))
            .err()
            .map(|e| format!("Game logged in memory but not saved: {}", e))
    }
}
