// ABOUTME: Lifecycle notifications an orchestrator sends to an FDU record.
// ABOUTME: Migration hooks default to no-ops.

use crate::types::Pid;

/// One-way notifications that the workload has moved to a new phase.
///
/// Implementations update their status and never fail. Whether the move was
/// legal is the orchestrator's business.
pub trait FduLifecycle {
    fn on_defined(&mut self);

    fn on_configured(&mut self);

    fn on_clean(&mut self);

    fn on_start(&mut self, pid: Pid);

    fn on_stop(&mut self);

    fn on_pause(&mut self);

    fn on_resume(&mut self);

    fn before_migrate(&mut self) {}

    fn after_migrate(&mut self) {}
}
