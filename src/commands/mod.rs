//! CLI command implementations.
//!
//! - **show**: recompute the table, bar chart and heatmap for one parameter tuple
//! - **methods**: list selectable sources and sort methods
//! - **init**: write a default `.mscmap.toml`

pub mod init;
pub mod methods;
pub mod show;

pub use init::{init_config, init_config_at};
pub use methods::{list_methods, write_methods};
pub use show::{handle_show, run_show, ShowConfig};
