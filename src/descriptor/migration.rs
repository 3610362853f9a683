// ABOUTME: Migration kind requested by a deployment descriptor.
// ABOUTME: Parsed case-insensitively from LIVE / COLD.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DescriptorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MigrationKind {
    Live,
    #[default]
    Cold,
}

impl FromStr for MigrationKind {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(MigrationKind::Live),
            "cold" => Ok(MigrationKind::Cold),
            _ => Err(DescriptorError::UnknownMigrationKind(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for MigrationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for MigrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationKind::Live => f.write_str("LIVE"),
            MigrationKind::Cold => f.write_str("COLD"),
        }
    }
}
