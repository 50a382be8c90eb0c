//! Read-only dataset store.
//!
//! Holds the class records of both reference sources and the sparse count
//! index. It is built once at startup and handed to the pipeline by
//! reference; nothing mutates it afterwards.

pub mod csv_loader;

use crate::core::{ClassRecord, CountIndex, CountTriple, SourceKey};
use crate::errors::Result;
use std::path::PathBuf;
use tracing::{debug, info};

pub use csv_loader::{parse_counts, parse_records, read_counts, read_records};

/// Locations of the three dataset files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataFiles {
    pub zb1: PathBuf,
    pub mr1: PathBuf,
    pub counts: PathBuf,
}

impl DataFiles {
    pub fn records_path(&self, source: SourceKey) -> &PathBuf {
        match source {
            SourceKey::Zb1 => &self.zb1,
            SourceKey::Mr1 => &self.mr1,
        }
    }
}

/// Immutable collections loaded at process start.
#[derive(Clone, Debug)]
pub struct DatasetStore {
    zb1: im::Vector<ClassRecord>,
    mr1: im::Vector<ClassRecord>,
    counts: CountIndex,
}

impl DatasetStore {
    /// Builds a store from in-memory collections.
    ///
    /// Fails with `ScoreOutOfRange` if a score is NaN or outside `[0, 1]`,
    /// and with `DuplicateCount` if a `(true, predicted)` pair repeats.
    pub fn from_parts(
        zb1: impl IntoIterator<Item = ClassRecord>,
        mr1: impl IntoIterator<Item = ClassRecord>,
        counts: impl IntoIterator<Item = CountTriple>,
    ) -> Result<Self> {
        Ok(Self {
            zb1: checked_records(SourceKey::Zb1, zb1)?,
            mr1: checked_records(SourceKey::Mr1, mr1)?,
            counts: CountIndex::try_from_triples(counts)?,
        })
    }

    /// Loads and validates all dataset files.
    pub fn load(files: &DataFiles) -> Result<Self> {
        let load_source = |source: SourceKey| {
            let path = files.records_path(source);
            debug!(source = %source, path = %path.display(), "Loading class records");
            read_records(path, source)
        };
        let zb1 = load_source(SourceKey::Zb1)?;
        let mr1 = load_source(SourceKey::Mr1)?;

        debug!(path = %files.counts.display(), "Loading count triples");
        let triples = read_counts(&files.counts)?;

        let store = Self::from_parts(zb1, mr1, triples)?;

        info!(
            zb1_records = store.zb1.len(),
            mr1_records = store.mr1.len(),
            count_pairs = store.counts.len(),
            "Dataset store loaded"
        );

        Ok(store)
    }

    /// Class records of a reference source, in file order.
    pub fn records(&self, source: SourceKey) -> &im::Vector<ClassRecord> {
        match source {
            SourceKey::Zb1 => &self.zb1,
            SourceKey::Mr1 => &self.mr1,
        }
    }

    /// Class records for a raw source key; fails with `UnknownSource`.
    pub fn load_source(&self, key: &str) -> Result<&im::Vector<ClassRecord>> {
        Ok(self.records(key.parse()?))
    }

    pub fn counts(&self) -> &CountIndex {
        &self.counts
    }
}

fn checked_records(
    source: SourceKey,
    records: impl IntoIterator<Item = ClassRecord>,
) -> Result<im::Vector<ClassRecord>> {
    records
        .into_iter()
        .map(|record| record.check_scores(source).map(|()| record))
        .collect()
}
