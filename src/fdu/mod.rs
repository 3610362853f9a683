// ABOUTME: FDU records: base deployable unit, ROS2 specialisation, lifecycle.
// ABOUTME: Status moves through a table of transitions driven by hooks.

mod error;
mod lifecycle;
mod record;
mod state;
mod transitions;
mod unit;

pub use error::FduError;
pub use lifecycle::FduLifecycle;
pub use record::Ros2Fdu;
pub use state::State;
pub use transitions::{ParseTransitionError, Transition, TransitionPolicy};
pub use unit::DeployableUnit;
