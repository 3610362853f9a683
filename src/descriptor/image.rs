// ABOUTME: Image section of a deployment descriptor.
// ABOUTME: Locates the ROS2 application package the workload runs from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::deserialize::deserialize_uri;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Filesystem path or URI of the application image.
    #[serde(deserialize_with = "deserialize_uri")]
    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ImageDescriptor {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            checksum: None,
            format: None,
        }
    }
}

impl fmt::Display for ImageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
