// ABOUTME: Deployment descriptor model for ROS2 FDUs.
// ABOUTME: Parses YAML or JSON descriptors handed over by the orchestrator.

mod command;
mod deserialize;
mod error;
mod image;
mod migration;

pub use command::CommandSpec;
pub use error::DescriptorError;
pub use image::ImageDescriptor;
pub use migration::MigrationKind;

use crate::error::{Error, Result};
use crate::types::FduId;
use deserialize::deserialize_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hypervisor name carried by descriptors for this workload type.
pub const ROS2_HYPERVISOR: &str = "ROS2";

/// What the orchestrator knows about an FDU before any instance exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FduDescriptor {
    #[serde(alias = "uuid")]
    pub id: FduId,

    #[serde(deserialize_with = "deserialize_name")]
    pub name: String,

    pub image: ImageDescriptor,

    /// Absent commands are accepted here and rejected when a record is built.
    #[serde(default)]
    pub command: Option<CommandSpec>,

    #[serde(default = "default_hypervisor")]
    pub hypervisor: String,

    // The fields below are placement and networking hints for the
    // orchestrator. Records never read them; a record's interfaces and
    // connection points are filled in once they exist on the node.
    #[serde(default)]
    pub migration_kind: MigrationKind,

    #[serde(default)]
    pub interfaces: Vec<String>,

    #[serde(default)]
    pub connection_points: Vec<String>,

    #[serde(default)]
    pub depends_on: Vec<FduId>,
}

fn default_hypervisor() -> String {
    ROS2_HYPERVISOR.to_string()
}

impl FduDescriptor {
    /// Minimal descriptor, mostly useful in tests and templates.
    pub fn new(id: FduId, name: impl Into<String>, image: ImageDescriptor) -> Self {
        Self {
            id,
            name: name.into(),
            image,
            command: None,
            hypervisor: default_hypervisor(),
            migration_kind: MigrationKind::default(),
            interfaces: Vec::new(),
            connection_points: Vec::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_command(mut self, command: CommandSpec) -> Self {
        self.command = Some(command);
        self
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Load a descriptor, picking the format from the file extension.
    /// Anything other than `.json` is read as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let descriptor = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        if !descriptor.is_ros2() {
            tracing::warn!(
                fdu = %descriptor.id,
                hypervisor = %descriptor.hypervisor,
                "descriptor targets a different hypervisor"
            );
        }

        Ok(descriptor)
    }

    pub fn is_ros2(&self) -> bool {
        self.hypervisor.eq_ignore_ascii_case(ROS2_HYPERVISOR)
    }
}
