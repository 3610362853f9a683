// ABOUTME: Type-safe identifiers shared by descriptors and records.
// ABOUTME: Phantom-typed ids plus the process id newtype.

mod id;
mod pid;

pub use id::{FduId, FduMarker, Id, InstanceId, InstanceMarker};
pub use pid::{NOT_RUNNING, Pid};
