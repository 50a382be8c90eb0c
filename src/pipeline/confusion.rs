//! Dense confusion matrix over an ordered label sequence.

use crate::core::{CountIndex, CountTriple};
use serde::Serialize;
use std::fmt;

/// Square matrix of counts indexed by a label sequence.
///
/// Element `[i][j]` is the count for `labels[i]` as true code and
/// `labels[j]` as predicted code. Row `i` and column `i` always refer to
/// the same code; the values themselves are not symmetric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    rows: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Builds an N×N matrix for `labels` from the sparse index.
    ///
    /// Labels are used as given: duplicates produce duplicate rows and
    /// columns sharing the same data, so deduplication is the caller's job.
    /// Pairs absent from `counts` are 0.
    pub fn build(labels: &[String], counts: &CountIndex) -> Self {
        let rows = labels
            .iter()
            .map(|true_code| {
                labels
                    .iter()
                    .map(|predicted_code| counts.get(true_code, predicted_code))
                    .collect()
            })
            .collect();

        Self {
            labels: labels.to_vec(),
            rows,
        }
    }

    /// Builds from raw triples; a repeated pair resolves to its first entry.
    pub fn from_triples(labels: &[String], triples: impl IntoIterator<Item = CountTriple>) -> Self {
        Self::build(labels, &CountIndex::from_triples(triples))
    }

    /// Axis labels, in row (and column) order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Element at `[true_idx][predicted_idx]`
    pub fn get(&self, true_idx: usize, predicted_idx: usize) -> u64 {
        self.rows[true_idx][predicted_idx]
    }

    /// Matrix dimension N
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all cells
    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().sum()
    }

    /// Sum of the diagonal (true code predicted as itself)
    pub fn diagonal_total(&self) -> u64 {
        (0..self.len()).map(|i| self.rows[i][i]).sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .map(String::len)
            .chain(self.rows.iter().flatten().map(|v| v.to_string().len()))
            .max()
            .unwrap_or(1);

        write!(f, "{:width$}", "")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.rows) {
            write!(f, "{label:>width$}")?;
            for value in row {
                write!(f, " {value:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
