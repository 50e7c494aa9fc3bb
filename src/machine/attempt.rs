//! The attempt state machine for one puzzle level.

use super::outcome::{AttemptError, PendingSubmission, SubmitOutcome};
use crate::core::{
    check_all, link_kind, AttemptChain, AttemptState, LinkGuard, PuzzleDefinition, Rejection, Word,
};
use crate::oracle::{DefinitionBundle, DictionaryOracle, OracleError, WordJudge, WordVerdict};
use crate::record::RecordError;
use tracing::{debug, info, warn};

/// Tracks a player's chain for one puzzle level.
///
/// Submissions run in two phases. `begin_submit` performs every local check
/// and issues a ticket; `complete_submit` applies the dictionary verdict for
/// that ticket. Between the two, further submissions are refused and any
/// revert invalidates the ticket, so a late verdict can never land on a
/// chain it was not checked against. `submit` composes both phases around a
/// single oracle call.
pub struct AttemptMachine {
    definition: PuzzleDefinition,
    chain: AttemptChain,
    state: AttemptState,
    last_rejection: Option<Rejection>,
    pending: Option<u64>,
    next_ticket: u64,
    revision: u64,
    guards: Vec<LinkGuard>,
}

impl AttemptMachine {
    /// Start a fresh attempt at the source word.
    pub fn new(definition: PuzzleDefinition) -> Self {
        let chain = AttemptChain::new(definition.source_word().clone());
        Self::with_chain(definition, chain)
    }

    /// Rebuild a machine from a saved chain.
    ///
    /// The chain must start at the puzzle's source word and may only contain
    /// the destination as its last word.
    pub fn resume(definition: PuzzleDefinition, chain: AttemptChain) -> Result<Self, RecordError> {
        if chain.source() != definition.source_word() {
            return Err(RecordError::ValidationFailed(format!(
                "chain starts at '{}' but the puzzle starts at '{}'",
                chain.source(),
                definition.source_word()
            )));
        }

        let destination = definition.destination_word();
        if chain.words()[..chain.len() - 1].contains(destination) {
            return Err(RecordError::ValidationFailed(format!(
                "chain continues past the destination '{destination}'"
            )));
        }

        Ok(Self::with_chain(definition, chain))
    }

    fn with_chain(definition: PuzzleDefinition, chain: AttemptChain) -> Self {
        let state = AttemptState::for_chain_end(chain.last() == definition.destination_word());
        Self {
            definition,
            chain,
            state,
            last_rejection: None,
            pending: None,
            next_ticket: 0,
            revision: 0,
            guards: LinkGuard::standard(),
        }
    }

    /// Add a guard checked after the standard reuse and adjacency guards.
    pub fn add_guard(&mut self, guard: LinkGuard) {
        self.guards.push(guard);
    }

    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    pub fn chain(&self) -> &AttemptChain {
        &self.chain
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    /// Whether a submission is waiting on the oracle.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the chain uses no more links than the best known path.
    ///
    /// This does not require the attempt to be finished.
    pub fn is_perfect_score(&self) -> bool {
        self.chain.link_count() <= self.definition.best_path_length()
    }

    /// Check `raw` locally and, if it passes, issue a ticket for the oracle
    /// lookup.
    pub fn begin_submit(&mut self, raw: &str) -> Result<PendingSubmission, Rejection> {
        let word = match self.check_candidate(raw) {
            Ok(word) => word,
            Err(rejection) => {
                debug!(
                    puzzle = %self.definition.id(),
                    input = raw,
                    rejection = rejection.code(),
                    "submission rejected"
                );
                self.last_rejection = Some(rejection);
                return Err(rejection);
            }
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some(ticket);
        debug!(%word, ticket, revision = self.revision, "awaiting dictionary verdict");

        Ok(PendingSubmission {
            puzzle: self.definition.id(),
            level: self.definition.level().clone(),
            ticket,
            revision: self.revision,
            word,
        })
    }

    fn check_candidate(&self, raw: &str) -> Result<Word, Rejection> {
        let word = Word::parse(raw)?;
        if self.state.is_final() {
            return Err(Rejection::AlreadyFinished);
        }
        if self.pending.is_some() {
            return Err(Rejection::SubmissionPending);
        }
        check_all(&self.guards, &self.chain, &word)?;
        Ok(word)
    }

    /// Apply the oracle's verdict for `pending`.
    ///
    /// Returns `Stale` and changes nothing when the ticket was issued for
    /// another puzzle or level, is no longer the outstanding one, or the
    /// chain has moved since it was issued.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        verdict: Result<WordVerdict, OracleError>,
    ) -> SubmitOutcome {
        let foreign = pending.puzzle != self.definition.id()
            || &pending.level != self.definition.level();
        if foreign || self.pending != Some(pending.ticket) || self.revision != pending.revision {
            debug!(
                word = %pending.word,
                ticket = pending.ticket,
                level = %pending.level,
                "discarding stale dictionary verdict"
            );
            return SubmitOutcome::Stale;
        }
        self.pending = None;

        match verdict {
            Err(error) => {
                warn!(word = %pending.word, %error, "dictionary unavailable");
                self.reject(Rejection::OracleUnavailable)
            }
            Ok(WordVerdict::Rejected(violations)) => {
                debug!(word = %pending.word, ?violations, "word not accepted");
                self.reject(Rejection::WordNotFound)
            }
            Ok(WordVerdict::Accepted(definition)) => self.accept(pending.word, definition),
        }
    }

    fn reject(&mut self, rejection: Rejection) -> SubmitOutcome {
        self.last_rejection = Some(rejection);
        SubmitOutcome::Rejected(rejection)
    }

    fn accept(&mut self, word: Word, definition: Option<DefinitionBundle>) -> SubmitOutcome {
        let link = link_kind(self.chain.last().as_str(), word.as_str());
        let finished = &word == self.definition.destination_word();

        self.chain = self.chain.append(word.clone());
        self.revision += 1;
        self.last_rejection = None;
        self.state = AttemptState::for_chain_end(finished);

        info!(
            puzzle = %self.definition.id(),
            level = %self.definition.level(),
            %word,
            link = link.map(|l| l.name()),
            links = self.chain.link_count(),
            "link accepted"
        );
        if finished {
            info!(
                puzzle = %self.definition.id(),
                links = self.chain.link_count(),
                best = self.definition.best_path_length(),
                perfect = self.is_perfect_score(),
                "puzzle finished"
            );
        }

        SubmitOutcome::Accepted {
            word,
            link,
            finished,
            definition,
        }
    }

    /// Check `raw`, consult `judge`, and apply the verdict.
    pub async fn submit<O: DictionaryOracle>(
        &mut self,
        raw: &str,
        judge: &WordJudge<O>,
    ) -> SubmitOutcome {
        let pending = match self.begin_submit(raw) {
            Ok(pending) => pending,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let verdict = judge.is_word_accepted(pending.word()).await;
        self.complete_submit(pending, verdict)
    }

    /// Keep positions `0..=index` and drop the rest.
    ///
    /// Any outstanding submission becomes stale.
    pub fn revert_to(&mut self, index: usize) -> Result<(), AttemptError> {
        let chain = self
            .chain
            .truncated(index)
            .ok_or(AttemptError::IndexOutOfRange {
                index,
                len: self.chain.len(),
            })?;

        self.chain = chain;
        self.pending = None;
        self.revision += 1;
        self.last_rejection = None;
        self.state =
            AttemptState::for_chain_end(self.chain.last() == self.definition.destination_word());

        info!(
            puzzle = %self.definition.id(),
            level = %self.definition.level(),
            index,
            "reverted chain"
        );
        Ok(())
    }

    /// Drop any outstanding ticket so its verdict is discarded.
    pub fn cancel_pending(&mut self) {
        if let Some(ticket) = self.pending.take() {
            self.revision += 1;
            debug!(ticket, "cancelled pending submission");
        }
    }
}
