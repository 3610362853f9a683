// ABOUTME: Lifecycle states an FDU instance moves through.
// ABOUTME: Serialized in the orchestrator's SCREAMING_SNAKE_CASE form.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    /// Descriptor accepted, nothing prepared on the node yet.
    #[default]
    Defined,
    /// Image fetched and environment prepared; ready to start.
    Configured,
    /// Process launched by the supervisor.
    Running,
    /// Process suspended, pid still valid.
    Paused,
    /// Being relocated to another node.
    Migrating,
    /// The orchestrator gave up on this instance.
    Error,
}

impl State {
    pub const ALL: [State; 6] = [
        State::Defined,
        State::Configured,
        State::Running,
        State::Paused,
        State::Migrating,
        State::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::Defined => "DEFINED",
            State::Configured => "CONFIGURED",
            State::Running => "RUNNING",
            State::Paused => "PAUSED",
            State::Migrating => "MIGRATING",
            State::Error => "ERROR",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, State::Running)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serialized_form() {
        for state in State::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
    }

    #[test]
    fn default_is_defined() {
        assert_eq!(State::default(), State::Defined);
    }
}
