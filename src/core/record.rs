//! Per-class records of a reference source.

use super::method::{Method, METHODS};
use super::source::SourceKey;
use crate::errors::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Whether `value` is a usable F-score: a finite number within `[0, 1]`.
pub fn is_valid_score(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// F-scores for every method in the fixed method list.
///
/// Backed by a fixed-size array indexed by [`Method::index`], so a score
/// for each method is present by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MethodScores([f64; Method::COUNT]);

impl MethodScores {
    /// Builds scores by asking `score_of` for each method in canonical order.
    pub fn from_fn(mut score_of: impl FnMut(Method) -> f64) -> Self {
        let mut scores = [0.0; Method::COUNT];
        for method in METHODS {
            scores[method.index()] = score_of(method);
        }
        Self(scores)
    }

    /// Fallible variant of [`MethodScores::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(
        mut score_of: impl FnMut(Method) -> std::result::Result<f64, E>,
    ) -> std::result::Result<Self, E> {
        let mut scores = [0.0; Method::COUNT];
        for method in METHODS {
            scores[method.index()] = score_of(method)?;
        }
        Ok(Self(scores))
    }

    pub fn get(&self, method: Method) -> f64 {
        self.0[method.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Method, f64)> + '_ {
        METHODS.iter().map(move |&m| (m, self.0[m.index()]))
    }

    /// First method in canonical order whose score is not a valid F-score.
    pub fn first_invalid(&self) -> Option<(Method, f64)> {
        self.iter().find(|&(_, score)| !is_valid_score(score))
    }
}

// Serialized with the record-file column names so JSON rows mirror the input.
impl Serialize for MethodScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Method::COUNT))?;
        for (method, score) in self.iter() {
            map.serialize_entry(&method.column(), &score)?;
        }
        map.end()
    }
}

/// One subject-classification code within a reference source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassRecord {
    #[serde(rename = "msc")]
    pub code: String,
    /// Number of observations backing the scores
    #[serde(rename = "p")]
    pub support: u64,
    #[serde(flatten)]
    pub scores: MethodScores,
}

impl ClassRecord {
    pub fn new(code: impl Into<String>, support: u64, scores: MethodScores) -> Self {
        Self {
            code: code.into(),
            support,
            scores,
        }
    }

    pub fn score(&self, method: Method) -> f64 {
        self.scores.get(method)
    }

    /// Rejects the record if any score lies outside `[0, 1]` or is NaN.
    pub fn check_scores(&self, source: SourceKey) -> Result<()> {
        match self.scores.first_invalid() {
            Some((method, value)) => {
                Err(Error::score_out_of_range(source, &self.code, method, value))
            }
            None => Ok(()),
        }
    }
}
