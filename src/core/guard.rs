//! Guards that a candidate word must pass before the oracle is consulted.
//!
//! Guards are pure predicates over the current chain and the candidate.
//! Each one carries the [`Rejection`] reported when it fails.

use super::chain::AttemptChain;
use super::rejection::Rejection;
use super::word::Word;

type LinkPredicate = Box<dyn Fn(&AttemptChain, &Word) -> bool + Send + Sync>;

/// Pure predicate that decides whether `candidate` may extend a chain.
///
/// # Example
///
/// ```rust
/// use wordchain::core::{AttemptChain, LinkGuard, Rejection, Word};
///
/// let chain = AttemptChain::new(Word::parse("care").unwrap());
/// let guard = LinkGuard::no_reuse();
///
/// assert_eq!(guard.check(&chain, &Word::parse("care").unwrap()), Err(Rejection::WordReused));
/// assert_eq!(guard.check(&chain, &Word::parse("cure").unwrap()), Ok(()));
/// ```
pub struct LinkGuard {
    predicate: LinkPredicate,
    rejection: Rejection,
}

impl LinkGuard {
    /// Create a guard from a pure predicate and the rejection it reports.
    pub fn new<F>(rejection: Rejection, predicate: F) -> Self
    where
        F: Fn(&AttemptChain, &Word) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            rejection,
        }
    }

    /// Rejects a candidate already in the chain, including the source word.
    pub fn no_reuse() -> Self {
        Self::new(Rejection::WordReused, |chain, candidate| {
            !chain.contains(candidate)
        })
    }

    /// Rejects a candidate that does not link from the chain's last word.
    pub fn adjacency() -> Self {
        Self::new(Rejection::NotAdjacent, |chain, candidate| {
            chain.last().is_adjacent_to(candidate)
        })
    }

    /// Guards every submission runs, in order.
    pub fn standard() -> Vec<Self> {
        vec![Self::no_reuse(), Self::adjacency()]
    }

    pub fn rejection(&self) -> Rejection {
        self.rejection
    }

    pub fn check(&self, chain: &AttemptChain, candidate: &Word) -> Result<(), Rejection> {
        if (self.predicate)(chain, candidate) {
            Ok(())
        } else {
            Err(self.rejection)
        }
    }
}

/// Run guards in order, stopping at the first failure.
pub fn check_all(
    guards: &[LinkGuard],
    chain: &AttemptChain,
    candidate: &Word,
) -> Result<(), Rejection> {
    guards
        .iter()
        .try_for_each(|guard| guard.check(chain, candidate))
}
