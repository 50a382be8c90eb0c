//! The fixed, ordered list of classification methods.

use crate::errors::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A classification method scored against the reference sources.
///
/// The declaration order is the canonical method order used for score
/// storage, chart series and table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Zb1,
    Mr1,
    Titer,
    Refs,
    Titls,
    Texts,
    Ref1,
    UT1,
    UM1,
    Tiref,
    Teref,
    Tite,
}

/// All methods in canonical order.
pub const METHODS: [Method; Method::COUNT] = [
    Method::Zb1,
    Method::Mr1,
    Method::Titer,
    Method::Refs,
    Method::Titls,
    Method::Texts,
    Method::Ref1,
    Method::UT1,
    Method::UM1,
    Method::Tiref,
    Method::Teref,
    Method::Tite,
];

impl Method {
    pub const COUNT: usize = 12;

    /// Method identifier as used in parameters and data files.
    pub fn key(&self) -> &'static str {
        match self {
            Method::Zb1 => "zb1",
            Method::Mr1 => "mr1",
            Method::Titer => "titer",
            Method::Refs => "refs",
            Method::Titls => "titls",
            Method::Texts => "texts",
            Method::Ref1 => "ref1",
            Method::UT1 => "uT1",
            Method::UM1 => "uM1",
            Method::Tiref => "tiref",
            Method::Teref => "teref",
            Method::Tite => "tite",
        }
    }

    /// Position in [`METHODS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of the score column in record files (`f` + key).
    pub fn column(&self) -> String {
        format!("f{}", self.key())
    }

    pub fn all() -> impl Iterator<Item = Method> {
        METHODS.into_iter()
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        METHODS
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| Error::InvalidSortKey { key: s.to_string() })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}
