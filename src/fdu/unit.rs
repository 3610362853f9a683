// ABOUTME: Generic deployable-unit capability shared by every FDU record.
// ABOUTME: Holds identity, image, command, and status with explicit accessors.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::State;
use crate::descriptor::{CommandSpec, FduDescriptor, ImageDescriptor};
use crate::types::{FduId, InstanceId};

/// The part of an FDU record that does not depend on the workload type.
///
/// Workload-specific records embed one of these and forward identity and
/// status queries to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployableUnit {
    uuid: InstanceId,
    fdu_id: FduId,
    image: ImageDescriptor,
    command: Option<CommandSpec>,
    status: State,
    status_changed_at: DateTime<Utc>,
}

impl DeployableUnit {
    /// Start a unit in `Defined` for an instance of `descriptor`.
    pub fn new(descriptor: &FduDescriptor, uuid: InstanceId) -> Self {
        Self {
            uuid,
            fdu_id: descriptor.id.clone(),
            image: descriptor.image.clone(),
            command: descriptor.command.clone(),
            status: State::Defined,
            status_changed_at: Utc::now(),
        }
    }

    pub fn uuid(&self) -> &InstanceId {
        &self.uuid
    }

    pub fn fdu_id(&self) -> &FduId {
        &self.fdu_id
    }

    pub fn image(&self) -> &ImageDescriptor {
        &self.image
    }

    pub fn command(&self) -> Option<&CommandSpec> {
        self.command.as_ref()
    }

    pub fn status(&self) -> State {
        self.status
    }

    pub fn status_changed_at(&self) -> DateTime<Utc> {
        self.status_changed_at
    }

    pub fn set_command(&mut self, command: Option<CommandSpec>) {
        self.command = command;
    }

    /// Overwrite the status. No legality check happens here.
    pub fn set_status(&mut self, status: State) {
        tracing::debug!(
            uuid = %self.uuid,
            from = %self.status,
            to = %status,
            "status change"
        );
        self.status = status;
        self.status_changed_at = Utc::now();
    }
}
