//! Sparse (true, predicted) co-occurrence counts.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One observed `(true code, predicted code) -> count` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTriple {
    #[serde(rename = "true")]
    pub true_code: String,
    #[serde(rename = "predicted")]
    pub predicted_code: String,
    pub count: u64,
}

impl CountTriple {
    pub fn new(
        true_code: impl Into<String>,
        predicted_code: impl Into<String>,
        count: u64,
    ) -> Self {
        Self {
            true_code: true_code.into(),
            predicted_code: predicted_code.into(),
            count,
        }
    }
}

/// Lookup structure keyed by the ordered pair `(true, predicted)`.
///
/// Pairs that were never observed resolve to 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountIndex {
    by_true: HashMap<String, HashMap<String, u64>>,
    len: usize,
}

impl CountIndex {
    /// Builds an index, keeping the first count seen for a repeated pair.
    pub fn from_triples(triples: impl IntoIterator<Item = CountTriple>) -> Self {
        let mut index = Self::default();
        for triple in triples {
            // Later duplicates are ignored
            let _ = index.insert(triple);
        }
        index
    }

    /// Builds an index, rejecting repeated pairs with [`Error::DuplicateCount`].
    pub fn try_from_triples(triples: impl IntoIterator<Item = CountTriple>) -> Result<Self> {
        let mut index = Self::default();
        for triple in triples {
            index.insert(triple)?;
        }
        Ok(index)
    }

    fn insert(&mut self, triple: CountTriple) -> Result<()> {
        let row = self.by_true.entry(triple.true_code.clone()).or_default();
        match row.entry(triple.predicted_code) {
            Entry::Occupied(entry) => Err(Error::DuplicateCount {
                true_code: triple.true_code,
                predicted_code: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(triple.count);
                self.len += 1;
                Ok(())
            }
        }
    }

    /// Count for `(true_code, predicted_code)`, 0 when the pair is absent.
    pub fn get(&self, true_code: &str, predicted_code: &str) -> u64 {
        self.by_true
            .get(true_code)
            .and_then(|row| row.get(predicted_code))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct observed pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
