//! Reference label sources.

use crate::errors::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the two canonical labelings the methods are scored against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKey {
    /// zbMATH
    Zb1,
    /// Mathematical Reviews
    Mr1,
}

impl SourceKey {
    pub const ALL: [SourceKey; 2] = [SourceKey::Zb1, SourceKey::Mr1];

    pub fn key(&self) -> &'static str {
        match self {
            SourceKey::Zb1 => "zb1",
            SourceKey::Mr1 => "mr1",
        }
    }

    /// Human-readable label, e.g. for a source picker.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKey::Zb1 => "zbMATH (zb1)",
            SourceKey::Mr1 => "Mathematical Reviews (mr1)",
        }
    }
}

impl FromStr for SourceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zb1" => Ok(SourceKey::Zb1),
            "mr1" => Ok(SourceKey::Mr1),
            _ => Err(Error::UnknownSource { key: s.to_string() }),
        }
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SourceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for SourceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
