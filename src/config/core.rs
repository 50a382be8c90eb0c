use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{Method, SourceKey};
use crate::pipeline::{HeatmapSettings, RecomputeParams, DEFAULT_LABEL_SUFFIX};
use crate::store::DataFiles;

/// Root configuration structure for mscmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MscmapConfig {
    /// Dataset file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Initial parameter values
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Confusion-matrix label source and display
    #[serde(default)]
    pub heatmap: HeatmapConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_zb1_file")]
    pub zb1_file: String,

    #[serde(default = "default_mr1_file")]
    pub mr1_file: String,

    #[serde(default = "default_counts_file")]
    pub counts_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            zb1_file: default_zb1_file(),
            mr1_file: default_mr1_file(),
            counts_file: default_counts_file(),
        }
    }
}

impl DataConfig {
    /// Resolves file paths, optionally under a different data directory.
    pub fn files(&self, dir_override: Option<&Path>) -> DataFiles {
        let dir = dir_override.unwrap_or(self.dir.as_path());
        DataFiles {
            zb1: dir.join(&self.zb1_file),
            mr1: dir.join(&self.mr1_file),
            counts: dir.join(&self.counts_file),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_source")]
    pub source: SourceKey,

    #[serde(default = "default_minimum")]
    pub minimum: u64,

    #[serde(default = "default_sort")]
    pub sort: Method,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            minimum: default_minimum(),
            sort: default_sort(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default = "default_source")]
    pub reference_source: SourceKey,

    #[serde(default = "default_sort")]
    pub label_sort: Method,

    #[serde(default = "default_label_suffix")]
    pub label_suffix: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            reference_source: default_source(),
            label_sort: default_sort(),
            label_suffix: default_label_suffix(),
        }
    }
}

impl HeatmapConfig {
    pub fn settings(&self) -> HeatmapSettings {
        HeatmapSettings {
            reference_source: self.reference_source,
            label_sort: self.label_sort,
            label_suffix: self.label_suffix.clone(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_zb1_file() -> String {
    "zbByMsc.csv".to_string()
}
fn default_mr1_file() -> String {
    "mrByMsc.csv".to_string()
}
fn default_counts_file() -> String {
    "counts.csv".to_string()
}
fn default_source() -> SourceKey {
    SourceKey::Zb1
}
fn default_minimum() -> u64 {
    200
}
fn default_sort() -> Method {
    Method::Mr1
}
fn default_label_suffix() -> String {
    DEFAULT_LABEL_SUFFIX.to_string()
}
