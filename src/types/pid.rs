// ABOUTME: Process identifier of a running ROS2 workload.
// ABOUTME: Replaces the -1 "not running" sentinel with Option<Pid>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used by orchestrators that store the pid as a signed integer.
pub const NOT_RUNNING: i64 = -1;

/// A process id reported by the supervisor that launched the workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(u32);

impl Pid {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Encode an optional pid using the legacy sentinel.
    pub fn to_raw(pid: Option<Self>) -> i64 {
        pid.map_or(NOT_RUNNING, |p| i64::from(p.0))
    }
}

impl From<u32> for Pid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_form_uses_sentinel() {
        assert_eq!(Pid::to_raw(None), NOT_RUNNING);
        assert_eq!(Pid::to_raw(Some(Pid::new(7))), 7);
    }
}
