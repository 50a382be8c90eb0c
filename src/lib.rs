//! Side-by-side comparison of MSC (Mathematics Subject Classification)
//! automatic classification methods.
//!
//! Per-class F1 scores for twelve methods are loaded for two reference
//! datasets (zbMATH and Mathematical Reviews), together with a table of
//! true/predicted class counts. One parameter tuple `(source, minimum, sort)`
//! produces three synchronized outputs: a ranked table, a grouped bar chart
//! description and a confusion-matrix heatmap.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    ClassRecord, CountIndex, CountTriple, Method, MethodScores, SourceKey, METHODS,
};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::pipeline::{
    ConfusionMatrix, HeatmapSettings, Pipeline, Recomputation, RecomputeParams,
};

pub use crate::store::{DataFiles, DatasetStore};
