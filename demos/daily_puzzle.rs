//! Play a scripted daily puzzle with logging enabled.
//!
//! Run with `RUST_LOG=wordchain=debug` to see every guard decision.

use async_trait::async_trait;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;
use wordchain::core::{Level, PuzzleId, Word};
use wordchain::machine::{PuzzleSession, SessionError, SubmitOutcome};
use wordchain::oracle::{AcceptancePolicyBuilder, DictionaryOracle, OracleError, WordJudge};
use wordchain::record::MemoryStore;
use wordchain::settings::PlayerSettings;
use wordchain::source::StaticPuzzleSource;

const PUZZLE: &str = r#"{
    "easy": { "source_word": "care", "destination_word": "cure", "best_path_length": 1 },
    "hard": { "source_word": "grin", "destination_word": "rings", "best_path": "ring,rings" }
}"#;

struct WordList(HashSet<&'static str>);

#[async_trait]
impl DictionaryOracle for WordList {
    async fn word_exists(&self, word: &Word) -> Result<bool, OracleError> {
        Ok(self.0.contains(word.as_str()))
    }

    async fn usage_frequency(&self, word: &Word) -> Result<Option<u64>, OracleError> {
        Ok(Some(if word.len() > 4 { 250 } else { 10_000 }))
    }
}

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordchain=info")),
        )
        .init();

    let source = StaticPuzzleSource::new().with_document(PuzzleId(1), PUZZLE);
    let oracle = WordList(["care", "core", "cure", "grin", "ring", "rings"].into_iter().collect());
    let judge = WordJudge::with_policy(oracle, AcceptancePolicyBuilder::new().min_frequency(200).build());
    let store = MemoryStore::new();

    let mut session =
        PuzzleSession::open(&source, store.clone(), judge, PlayerSettings::default(), PuzzleId(1))
            .await?;

    for input in ["care", "xyzzy", "core", "cure"] {
        report(input, session.submit(input).await?);
    }
    println!("perfect: {}", session.is_solved_perfectly());

    session.switch_level(Level::hard()).await?;
    for input in ["ring", "rings"] {
        report(input, session.submit(input).await?);
    }
    println!(
        "hard chain: {:?}",
        session
            .machine()
            .chain()
            .words()
            .iter()
            .map(Word::as_str)
            .collect::<Vec<_>>()
    );

    println!("stored: {:?}", store.raw("chain_letters.puzzles.1")?);
    Ok(())
}

fn report(input: &str, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted { word, link, finished, .. } => {
            println!("{input}: accepted {word} via {link:?}, finished = {finished}")
        }
        SubmitOutcome::Rejected(rejection) => println!("{input}: {rejection}"),
        SubmitOutcome::Stale => println!("{input}: stale"),
    }
}
