// ABOUTME: Error types for FDU record construction and checked transitions.
// ABOUTME: Hooks themselves are total and never produce these.

use super::State;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FduError {
    /// The descriptor carried no launch command.
    #[error("invalid configuration: command cannot be absent for a ROS2 application")]
    MissingCommand,

    /// A strict transition request from a state that does not allow it.
    #[error("cannot {transition} an FDU in state {from} (would move to {to})")]
    InvalidTransition {
        transition: &'static str,
        from: State,
        to: State,
    },
}
