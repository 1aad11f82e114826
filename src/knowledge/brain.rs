use super::matching::{nearest_by_lexical, nearest_by_value};
use super::storage::WordIndex;
use crate::word::{UnlearnedWord, Word};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Answer to one analyze request. Both fields are `null` on the wire when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub value: Option<String>,
    pub lexical: Option<String>,
}

#[derive(Clone)]
pub(crate) struct Brain {
    index: Arc<Mutex<WordIndex>>,
}

impl Brain {
    pub fn new() -> Self {
        let brain = Self {
            index: Arc::new(Mutex::new(WordIndex::new())),
        };
        info!("brain init, empty index");
        brain
    }

    /// Looks up the nearest known words, then learns the word.
    /// Lookups and insert happen under one lock so no request sees a half-updated index.
    pub async fn analyze(&self, unlearned: UnlearnedWord) -> Analysis {
        let word = match Word::try_from(unlearned) {
            Ok(word) => word,
            Err(e) => {
                warn!("analyze rejected input: {}", e);
                return Analysis::default();
            }
        };

        let start = Instant::now();
        let mut index = self.index.lock().await;
        let analysis = if index.is_empty() {
            Analysis::default()
        } else {
            Analysis {
                value: nearest_by_value(&index, word.as_str()),
                lexical: nearest_by_lexical(&index, word.as_str()),
            }
        };
        if index.insert(word.as_str()) {
            debug!("learned {}, index len: {}", word, index.len());
        }
        drop(index);

        let elapsed = start.elapsed().as_secs_f64();
        info!(
            "analyze {} spends {}s, value: {:?}, lexical: {:?}",
            word, elapsed, analysis.value, analysis.lexical
        );
        analysis
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.index.lock().await.len()
    }

    #[cfg(test)]
    pub async fn contains(&self, word: &str) -> bool {
        self.index.lock().await.contains(word)
    }
}
