//! Ranking by a method's score.

use crate::core::{ClassRecord, Method};
use crate::errors::Result;
use std::cmp::Ordering;

/// Sorts records by `method`'s score, highest first (pure).
///
/// The sort is stable: records with equal scores keep their relative input
/// order, so rankings are reproducible for fixtures with ties.
pub fn sort_by_method(mut records: Vec<ClassRecord>, method: Method) -> Vec<ClassRecord> {
    records.sort_by(|a, b| compare_desc(a.score(method), b.score(method)));
    records
}

/// Parses `key` against the method list, then sorts as [`sort_by_method`].
///
/// Fails with `InvalidSortKey` before touching the records.
pub fn sort_by_key(records: Vec<ClassRecord>, key: &str) -> Result<Vec<ClassRecord>> {
    let method: Method = key.parse()?;
    Ok(sort_by_method(records, method))
}

/// Whether consecutive scores never increase.
pub fn is_ranked(records: &[ClassRecord], method: Method) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].score(method) >= pair[1].score(method))
}

// Descending; NaN sorts after every number.
fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
