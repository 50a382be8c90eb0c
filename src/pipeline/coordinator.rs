//! Recompute coordinator.
//!
//! Turns one parameter tuple into the three synchronized outputs:
//!
//! ```text
//! DatasetStore
//!      │
//!      ├─→ records(source) → filter(minimum) → sort(sort)      → table
//!      │                                                      └→ bar series
//!      │
//!      └─→ records(reference) → filter(minimum) → sort(label_sort)
//!                → codes → ConfusionMatrix::build + format_labels → heatmap
//! ```
//!
//! The heatmap label set is always drawn from the configured reference
//! source, whichever source the table uses. Every call is a pure function
//! of its parameters and the store; nothing is cached between calls.

use super::confusion::ConfusionMatrix;
use super::filter::{filter_with_metrics, parse_threshold};
use super::labels::{format_labels, DEFAULT_LABEL_SUFFIX};
use super::ranking::sort_by_method;
use crate::core::{ClassRecord, Method, SourceKey, METHODS};
use crate::errors::Result;
use crate::store::DatasetStore;
use serde::Serialize;
use tracing::debug;

/// The three request parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecomputeParams {
    pub source: SourceKey,
    pub minimum: u64,
    pub sort: Method,
}

impl Default for RecomputeParams {
    fn default() -> Self {
        Self {
            source: SourceKey::Zb1,
            minimum: 200,
            sort: Method::Mr1,
        }
    }
}

impl RecomputeParams {
    pub fn new(source: SourceKey, minimum: u64, sort: Method) -> Self {
        Self {
            source,
            minimum,
            sort,
        }
    }

    /// Validates raw parameters; fails on the first invalid one.
    pub fn parse(source: &str, minimum: &str, sort: &str) -> Result<Self> {
        Ok(Self {
            source: source.parse()?,
            minimum: parse_threshold(minimum)?,
            sort: sort.parse()?,
        })
    }
}

/// Where the heatmap takes its labels from and how they are displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatmapSettings {
    pub reference_source: SourceKey,
    pub label_sort: Method,
    pub label_suffix: String,
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        Self {
            reference_source: SourceKey::Zb1,
            label_sort: Method::Mr1,
            label_suffix: DEFAULT_LABEL_SUFFIX.to_string(),
        }
    }
}

/// One bar: a class code and its score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarPoint {
    #[serde(rename = "msc")]
    pub code: String,
    pub score: f64,
}

/// All bars of one method, in table order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarSeries {
    pub method: Method,
    pub points: Vec<BarPoint>,
}

/// Axis settings for the grouped bar chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartLayout {
    pub barmode: &'static str,
    pub x_title: &'static str,
    pub x_type: &'static str,
    pub y_title: &'static str,
    pub y_range: [f64; 2],
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            barmode: "group",
            x_title: "msc",
            x_type: "category",
            y_title: "f1-score",
            y_range: [0.0, 1.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    pub layout: ChartLayout,
    pub series: Vec<BarSeries>,
}

/// Confusion matrix plus axis labels in matching order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Heatmap {
    pub reference_source: SourceKey,
    pub matrix: ConfusionMatrix,
    pub display_labels: Vec<String>,
}

/// Everything produced for one parameter tuple.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recomputation {
    pub params: RecomputeParams,
    pub table: Vec<ClassRecord>,
    pub chart: BarChart,
    pub heatmap: Heatmap,
}

/// Filters `records` by support and ranks them by `method` (pure).
pub fn ranked_view(
    records: &im::Vector<ClassRecord>,
    minimum: u64,
    method: Method,
) -> Vec<ClassRecord> {
    let outcome = filter_with_metrics(records, minimum);
    debug!(
        minimum = outcome.minimum,
        kept = outcome.kept.len(),
        dropped = outcome.dropped,
        total = outcome.total(),
        "Applied support threshold"
    );
    sort_by_method(outcome.kept, method)
}

/// One series per method over the ranked rows; all share the x axis.
pub fn bar_series(table: &[ClassRecord]) -> Vec<BarSeries> {
    METHODS
        .iter()
        .map(|&method| BarSeries {
            method,
            points: table
                .iter()
                .map(|record| BarPoint {
                    code: record.code.clone(),
                    score: record.score(method),
                })
                .collect(),
        })
        .collect()
}

/// Builds the heatmap from the reference source's ranked codes (pure).
pub fn heatmap(store: &DatasetStore, minimum: u64, settings: &HeatmapSettings) -> Heatmap {
    let reference = ranked_view(
        store.records(settings.reference_source),
        minimum,
        settings.label_sort,
    );
    let codes: Vec<String> = reference.into_iter().map(|record| record.code).collect();

    Heatmap {
        reference_source: settings.reference_source,
        matrix: ConfusionMatrix::build(&codes, store.counts()),
        display_labels: format_labels(&codes, &settings.label_suffix),
    }
}

/// Computes table, chart and heatmap for one parameter tuple (pure).
pub fn recompute(
    store: &DatasetStore,
    params: RecomputeParams,
    settings: &HeatmapSettings,
) -> Recomputation {
    let table = ranked_view(store.records(params.source), params.minimum, params.sort);
    let chart = BarChart {
        layout: ChartLayout::default(),
        series: bar_series(&table),
    };
    let heatmap = heatmap(store, params.minimum, settings);

    Recomputation {
        params,
        table,
        chart,
        heatmap,
    }
}

/// A store handle bundled with heatmap settings.
#[derive(Clone, Debug)]
pub struct Pipeline<'a> {
    store: &'a DatasetStore,
    settings: HeatmapSettings,
}

impl<'a> Pipeline<'a> {
    pub fn new(store: &'a DatasetStore, settings: HeatmapSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &HeatmapSettings {
        &self.settings
    }

    pub fn recompute(&self, params: RecomputeParams) -> Recomputation {
        let result = recompute(self.store, params, &self.settings);
        debug!(
            source = %params.source,
            minimum = params.minimum,
            sort = %params.sort,
            rows = result.table.len(),
            matrix_size = result.heatmap.matrix.len(),
            "Recomputed outputs"
        );
        result
    }

    /// Validates raw parameters, then recomputes. No output on error.
    pub fn recompute_raw(&self, source: &str, minimum: &str, sort: &str) -> Result<Recomputation> {
        let params = RecomputeParams::parse(source, minimum, sort)?;
        Ok(self.recompute(params))
    }
}
