//! Imperative shell around the attempt machine.
//!
//! A session owns one puzzle's levels, the player's saved record, and the
//! active machine. Store reads and writes are stillwater effects run against
//! the session's environment; the pure machine never touches the store.

use super::attempt::AttemptMachine;
use super::outcome::{AttemptError, PendingSubmission, SubmitOutcome};
use crate::core::{Level, PuzzleError, PuzzleId, PuzzleSet, Rejection};
use crate::oracle::{DictionaryOracle, OracleError, WordJudge, WordVerdict};
use crate::record::{AttemptRecord, AttemptStore, StoreError};
use crate::settings::PlayerSettings;
use crate::source::PuzzleSource;
use std::collections::BTreeMap;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Attempt(#[from] AttemptError),

    #[error("Puzzle {id} has no level '{level}'")]
    UnknownLevel { id: PuzzleId, level: Level },
}

/// Read the record for `id` from the environment's store.
pub fn load_record<Env>(
    id: PuzzleId,
) -> impl Effect<Output = Option<AttemptRecord>, Error = StoreError, Env = Env>
where
    Env: AttemptStore + Clone + Send + Sync + 'static,
{
    from_fn(move |store: &Env| store.load(id))
}

/// Write `record` to the environment's store.
pub fn save_record<Env>(record: AttemptRecord) -> impl Effect<Output = (), Error = StoreError, Env = Env>
where
    Env: AttemptStore + Clone + Send + Sync + 'static,
{
    from_fn(move |store: &Env| store.save(&record))
}

/// One player's session with one daily puzzle.
pub struct PuzzleSession<O, Env> {
    puzzle: PuzzleSet,
    record: AttemptRecord,
    level: Level,
    machine: AttemptMachine,
    parked: BTreeMap<Level, AttemptMachine>,
    judge: WordJudge<O>,
    settings: PlayerSettings,
    env: Env,
}

impl<O, Env> PuzzleSession<O, Env>
where
    O: DictionaryOracle,
    Env: AttemptStore + Clone + Send + Sync + 'static,
{
    /// Load puzzle `id` and the player's saved attempt.
    ///
    /// The level opened is the one last played, then the preferred level,
    /// then `easy`, then the first level the puzzle defines. An unreadable
    /// record is discarded; a failing store is an error.
    pub async fn open<S>(
        source: &S,
        env: Env,
        judge: WordJudge<O>,
        settings: PlayerSettings,
        id: PuzzleId,
    ) -> Result<Self, SessionError>
    where
        S: PuzzleSource + ?Sized,
    {
        let puzzle = source.load(id).await?;

        let record = match load_record(id).run(&env).await {
            Ok(Some(record)) if record.puzzle_id == id => record,
            Ok(Some(record)) => {
                warn!(%id, found = %record.puzzle_id, "stored record belongs to another puzzle");
                AttemptRecord::new(id)
            }
            Ok(None) => AttemptRecord::new(id),
            Err(StoreError::Record(error)) => {
                warn!(%id, %error, "discarding unreadable attempt record");
                AttemptRecord::new(id)
            }
            Err(error) => return Err(error.into()),
        };

        let level = opening_level(&puzzle, &record, &settings);
        let (machine, record) = activate(&puzzle, record, &level)?;

        info!(
            %id,
            %level,
            links = machine.chain().link_count(),
            state = machine.state().name(),
            "opened puzzle"
        );

        Ok(Self {
            puzzle,
            record,
            level,
            machine,
            parked: BTreeMap::new(),
            judge,
            settings,
            env,
        })
    }

    pub fn puzzle(&self) -> &PuzzleSet {
        &self.puzzle
    }

    pub fn record(&self) -> &AttemptRecord {
        &self.record
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn machine(&self) -> &AttemptMachine {
        &self.machine
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn judge(&self) -> &WordJudge<O> {
        &self.judge
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Whether the active level is finished within the best path length.
    pub fn is_solved_perfectly(&self) -> bool {
        self.machine.is_finished() && self.machine.is_perfect_score()
    }

    /// Submit a word to the active level and save the chain if it was
    /// accepted.
    ///
    /// The outcome is applied in memory before saving, so a store error
    /// leaves the accepted word on the chain.
    pub async fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        let outcome = self.machine.submit(raw, &self.judge).await;
        self.after_outcome(&outcome).await?;
        Ok(outcome)
    }

    /// First phase of a submission whose oracle call the caller drives.
    pub fn begin_submit(&mut self, raw: &str) -> Result<PendingSubmission, Rejection> {
        self.machine.begin_submit(raw)
    }

    /// Apply a verdict obtained for `pending` and save if it was accepted.
    ///
    /// A verdict for a level other than the active one is `Stale`.
    pub async fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        verdict: Result<WordVerdict, OracleError>,
    ) -> Result<SubmitOutcome, SessionError> {
        let outcome = self.machine.complete_submit(pending, verdict);
        self.after_outcome(&outcome).await?;
        Ok(outcome)
    }

    async fn after_outcome(&mut self, outcome: &SubmitOutcome) -> Result<(), SessionError> {
        if !outcome.is_accepted() {
            return Ok(());
        }
        if self.settings.new_player {
            info!("first link accepted; player is no longer new");
            self.settings.new_player = false;
        }
        self.persist().await
    }

    /// Revert the active level to `index` and save.
    pub async fn revert_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.machine.revert_to(index)?;
        self.persist().await
    }

    /// Make `level` the active level and save.
    ///
    /// The chain of the level being left is kept in the record, and any
    /// submission still waiting on it is cancelled.
    pub async fn switch_level(&mut self, level: Level) -> Result<(), SessionError> {
        if level == self.level {
            return Ok(());
        }
        if self.puzzle.level(&level).is_none() {
            return Err(SessionError::UnknownLevel {
                id: self.puzzle.id(),
                level,
            });
        }

        self.machine.cancel_pending();
        self.record = self
            .record
            .with_chain(self.level.clone(), self.machine.chain().clone());

        let next = match self.parked.remove(&level) {
            Some(machine) => machine,
            None => {
                let (machine, record) = activate(&self.puzzle, self.record.clone(), &level)?;
                self.record = record;
                machine
            }
        };
        let previous = std::mem::replace(&mut self.machine, next);
        let previous_level = std::mem::replace(&mut self.level, level);
        self.parked.insert(previous_level.clone(), previous);

        info!(
            id = %self.puzzle.id(),
            from = %previous_level,
            to = %self.level,
            "switched level"
        );
        self.persist().await
    }

    async fn persist(&mut self) -> Result<(), SessionError> {
        self.record = self
            .record
            .with_chain(self.level.clone(), self.machine.chain().clone())
            .with_last_level(self.level.clone());
        save_record(self.record.clone()).run(&self.env).await?;
        Ok(())
    }
}

fn opening_level(puzzle: &PuzzleSet, record: &AttemptRecord, settings: &PlayerSettings) -> Level {
    [
        record.last_level.clone(),
        settings.preferred_level.clone(),
        Some(Level::easy()),
    ]
    .into_iter()
    .flatten()
    .find(|level| puzzle.level(level).is_some())
    .unwrap_or_else(|| puzzle.default_level().clone())
}

/// Build the machine for `level`, dropping a saved chain that no longer fits
/// the puzzle.
fn activate(
    puzzle: &PuzzleSet,
    record: AttemptRecord,
    level: &Level,
) -> Result<(AttemptMachine, AttemptRecord), SessionError> {
    let definition = puzzle
        .level(level)
        .cloned()
        .ok_or_else(|| SessionError::UnknownLevel {
            id: puzzle.id(),
            level: level.clone(),
        })?;

    let Some(saved) = record.chain_for(level).cloned() else {
        return Ok((AttemptMachine::new(definition), record));
    };

    match AttemptMachine::resume(definition.clone(), saved) {
        Ok(machine) => Ok((machine, record)),
        Err(error) => {
            warn!(id = %puzzle.id(), %level, %error, "discarding saved chain");
            let record = record.without_chain(level);
            Ok((AttemptMachine::new(definition), record))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::record::MemoryStore;
    use crate::source::StaticPuzzleSource;
    use async_trait::async_trait;

    struct ListOracle(&'static [&'static str]);

    #[async_trait]
    impl DictionaryOracle for ListOracle {
        async fn word_exists(&self, word: &Word) -> Result<bool, OracleError> {
            Ok(self.0.iter().any(|known| word == known))
        }
    }

    const PUZZLE: &str = r#"{
        "easy": { "source_word": "care", "destination_word": "cure", "best_path_length": 1 },
        "hard": { "source_word": "kiss", "destination_word": "skit", "best_path": ["skis", "skit"] }
    }"#;

    fn source() -> StaticPuzzleSource {
        StaticPuzzleSource::new().with_document(PuzzleId(5), PUZZLE)
    }

    async fn open(store: MemoryStore, settings: PlayerSettings) -> PuzzleSession<ListOracle, MemoryStore> {
        PuzzleSession::open(
            &source(),
            store,
            WordJudge::new(ListOracle(&["cure", "core", "skis", "skit"])),
            settings,
            PuzzleId(5),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn opens_easy_by_default() {
        let session = open(MemoryStore::new(), PlayerSettings::default()).await;
        assert_eq!(session.level(), &Level::easy());
        assert_eq!(session.machine().chain().len(), 1);
    }

    #[tokio::test]
    async fn preferred_level_used_without_history() {
        let settings = PlayerSettings {
            preferred_level: Some(Level::hard()),
            ..PlayerSettings::default()
        };
        let session = open(MemoryStore::new(), settings).await;
        assert_eq!(session.level(), &Level::hard());
    }

    #[tokio::test]
    async fn unknown_preferred_level_falls_back() {
        let settings = PlayerSettings {
            preferred_level: Some(Level::medium()),
            ..PlayerSettings::default()
        };
        let session = open(MemoryStore::new(), settings).await;
        assert_eq!(session.level(), &Level::easy());
    }

    #[tokio::test]
    async fn accepted_word_is_saved_and_clears_new_player() {
        let store = MemoryStore::new();
        let mut session = open(store.clone(), PlayerSettings::default()).await;

        let outcome = session.submit("cure").await.unwrap();

        assert!(outcome.is_accepted());
        assert!(!session.settings().new_player);
        assert!(session.is_solved_perfectly());
        let saved = store.load(PuzzleId(5)).unwrap().unwrap();
        assert_eq!(saved.chain_for(&Level::easy()), Some(session.machine().chain()));
        assert_eq!(saved.last_level, Some(Level::easy()));
    }

    #[tokio::test]
    async fn rejected_word_is_not_saved() {
        let store = MemoryStore::new();
        let mut session = open(store.clone(), PlayerSettings::default()).await;

        let outcome = session.submit("bare").await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::WordNotFound));
        assert!(store.is_empty());
        assert!(session.settings().new_player);
    }

    #[tokio::test]
    async fn switching_to_missing_level_fails() {
        let mut session = open(MemoryStore::new(), PlayerSettings::default()).await;
        assert!(matches!(
            session.switch_level(Level::medium()).await,
            Err(SessionError::UnknownLevel { .. })
        ));
        assert_eq!(session.level(), &Level::easy());
    }

    #[tokio::test]
    async fn corrupt_record_starts_fresh() {
        let store = MemoryStore::new();
        store
            .put_raw(crate::record::storage_key(PuzzleId(5)), "{broken")
            .unwrap();

        let session = open(store, PlayerSettings::default()).await;
        assert_eq!(session.machine().chain().len(), 1);
    }
}
