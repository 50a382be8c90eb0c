//! `.mscmap.toml` configuration: dataset locations, initial parameters and
//! heatmap label settings.

mod core;
mod loader;

pub use self::core::{DataConfig, DefaultsConfig, HeatmapConfig, MscmapConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Default configuration file contents written by `mscmap init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# mscmap configuration

[data]
dir = "data"
zb1_file = "zbByMsc.csv"
mr1_file = "mrByMsc.csv"
counts_file = "counts.csv"

[defaults]
source = "zb1"
minimum = 200
sort = "mr1"

[heatmap]
# Confusion-matrix labels always come from this source
reference_source = "zb1"
label_sort = "mr1"
label_suffix = "*"
"#;
