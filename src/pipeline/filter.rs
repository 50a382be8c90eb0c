//! Minimum-support threshold filter.
//!
//! Pure functions: the input collection is never modified and surviving
//! records keep their attributes and relative order.

use crate::core::{parse_whole_number, ClassRecord};
use crate::errors::{Error, Result};

/// Records that passed the threshold, plus how many were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Records with `support >= minimum`, in input order
    pub kept: Vec<ClassRecord>,
    /// Records below the threshold
    pub dropped: usize,
    /// Threshold that was applied
    pub minimum: u64,
}

impl FilterOutcome {
    /// Total records before filtering.
    pub fn total(&self) -> usize {
        self.kept.len() + self.dropped
    }
}

/// Keeps every record with `support >= minimum` (pure).
///
/// # Examples
///
/// ```
/// use mscmap::core::{ClassRecord, MethodScores};
/// use mscmap::pipeline::filter_by_support;
///
/// let scores = MethodScores::from_fn(|_| 0.5);
/// let records = vec![
///     ClassRecord::new("05", 120, scores),
///     ClassRecord::new("11", 480, scores),
/// ];
/// let kept = filter_by_support(&records, 200);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].code, "11");
/// ```
pub fn filter_by_support<'a, I>(records: I, minimum: u64) -> Vec<ClassRecord>
where
    I: IntoIterator<Item = &'a ClassRecord>,
{
    filter_with_metrics(records, minimum).kept
}

/// Threshold filter that also reports how many records it dropped (pure).
pub fn filter_with_metrics<'a, I>(records: I, minimum: u64) -> FilterOutcome
where
    I: IntoIterator<Item = &'a ClassRecord>,
{
    let mut dropped = 0;
    let kept = records
        .into_iter()
        .filter(|record| {
            let passes = support_passes(record.support, minimum);
            if !passes {
                dropped += 1;
            }
            passes
        })
        .cloned()
        .collect();

    FilterOutcome {
        kept,
        dropped,
        minimum,
    }
}

/// Parses a raw minimum-support parameter.
///
/// Accepts integers and integer-valued decimals; anything else (text,
/// fractions, negative or non-finite values) is `InvalidThreshold`.
/// No default is substituted.
pub fn parse_threshold(raw: &str) -> Result<u64> {
    parse_whole_number(raw).map_err(|reason| Error::InvalidThreshold {
        raw: raw.to_string(),
        reason,
    })
}

fn support_passes(support: u64, minimum: u64) -> bool {
    support >= minimum
}
