// ABOUTME: Table of lifecycle transitions and the policy used to check them.
// ABOUTME: Each transition names its target state and its legal predecessors.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::State;
use crate::types::Pid;

/// A lifecycle notification, as sent by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Define,
    Configure,
    Clean,
    Start(Pid),
    Stop,
    Pause,
    Resume,
}

impl Transition {
    /// State the record ends up in once the transition is applied.
    pub const fn target(self) -> State {
        match self {
            Transition::Define | Transition::Clean => State::Defined,
            Transition::Configure | Transition::Stop => State::Configured,
            Transition::Start(_) | Transition::Resume => State::Running,
            Transition::Pause => State::Paused,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Transition::Define => "define",
            Transition::Configure => "configure",
            Transition::Clean => "clean",
            Transition::Start(_) => "start",
            Transition::Stop => "stop",
            Transition::Pause => "pause",
            Transition::Resume => "resume",
        }
    }

    /// Whether `from` is a legal predecessor for this transition.
    pub fn is_legal_from(self, from: State) -> bool {
        match self {
            Transition::Define | Transition::Configure => from == State::Defined,
            Transition::Clean | Transition::Start(_) => from == State::Configured,
            Transition::Stop => matches!(from, State::Running | State::Paused | State::Configured),
            Transition::Pause => from == State::Running,
            Transition::Resume => from == State::Paused,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Start(pid) => write!(f, "start:{pid}"),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTransitionError {
    #[error("unknown transition: {0}")]
    Unknown(String),

    #[error("start requires a pid, e.g. start:4242")]
    MissingPid,

    #[error("invalid pid in transition: {0}")]
    InvalidPid(String),
}

impl FromStr for Transition {
    type Err = ParseTransitionError;

    /// Parses `define`, `configure`, `clean`, `start:<pid>`, `stop`, `pause`, `resume`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let transition = match name.to_ascii_lowercase().as_str() {
            "define" => Transition::Define,
            "configure" => Transition::Configure,
            "clean" => Transition::Clean,
            "start" => {
                let raw = arg.ok_or(ParseTransitionError::MissingPid)?;
                let pid = raw
                    .parse::<u32>()
                    .map_err(|_| ParseTransitionError::InvalidPid(raw.to_string()))?;
                return Ok(Transition::Start(Pid::new(pid)));
            }
            "stop" => Transition::Stop,
            "pause" => Transition::Pause,
            "resume" => Transition::Resume,
            _ => return Err(ParseTransitionError::Unknown(s.to_string())),
        };

        match arg {
            Some(_) => Err(ParseTransitionError::Unknown(s.to_string())),
            None => Ok(transition),
        }
    }
}

/// How checked transitions treat requests outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Apply anyway and log a warning; the caller owns correctness.
    #[default]
    Lenient,
    /// Reject with `FduError::InvalidTransition` and leave the record as is.
    Strict,
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(TransitionPolicy::Lenient),
            "strict" => Ok(TransitionPolicy::Strict),
            other => Err(format!("unknown transition policy: {other}")),
        }
    }
}
