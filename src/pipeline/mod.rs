//! Pure transformation pipeline from the dataset store to display outputs.
//!
//! Stages, leaf-first:
//! - [`filter`]: minimum-support threshold
//! - [`ranking`]: stable descending sort by a method's score
//! - [`confusion`]: sparse counts to a dense matrix over a label sequence
//! - [`labels`]: axis display labels aligned with the matrix
//! - [`coordinator`]: composes the stages into one atomic result per
//!   parameter tuple

pub mod confusion;
pub mod coordinator;
pub mod filter;
pub mod labels;
pub mod ranking;

pub use confusion::ConfusionMatrix;
pub use coordinator::{
    bar_series, heatmap, ranked_view, recompute, BarChart, BarPoint, BarSeries, ChartLayout,
    Heatmap, HeatmapSettings, Pipeline, Recomputation, RecomputeParams,
};
pub use filter::{filter_by_support, filter_with_metrics, parse_threshold, FilterOutcome};
pub use labels::{format_labels, DEFAULT_LABEL_SUFFIX};
pub use ranking::{is_ranked, sort_by_key, sort_by_method};
