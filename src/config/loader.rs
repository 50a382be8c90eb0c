use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::MscmapConfig;
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the directory tree
pub const CONFIG_FILE_NAME: &str = ".mscmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<MscmapConfig> {
    let config = toml::from_str::<MscmapConfig>(contents)
        .map_err(|e| Error::Config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    let data = &config.data;
    for (field, value) in [
        ("data.zb1_file", &data.zb1_file),
        ("data.mr1_file", &data.mr1_file),
        ("data.counts_file", &data.counts_file),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Config(format!("'{field}' must not be empty")));
        }
    }

    Ok(config)
}

/// Loads an explicitly requested config file; every failure is an error.
pub fn load_config_from(path: &Path) -> Result<MscmapConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    let config = parse_and_validate_config(&contents)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MscmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Searches `start` and its ancestors for the config file.
pub fn discover_config(start: PathBuf) -> MscmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MscmapConfig::default()
        })
}

/// Loads config from the current directory tree, falling back to defaults.
pub fn load_config() -> MscmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MscmapConfig::default()
        }
    }
}
