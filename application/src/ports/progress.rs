//! Progress notification port
//!
//! Defines the interface for reporting progress while members are working.

use council_domain::{CouncilMember, Phase};

/// Callback for progress updates during a council session
///
/// Implementations live in the presentation layer (spinners, plain text).
/// Every call is blocking, so a member start is always followed by its
/// completion before the next member starts.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called right before a member's request is sent
    fn on_member_start(&self, phase: &Phase, member: &CouncilMember);

    /// Called when a member's request has returned
    fn on_member_complete(&self, phase: &Phase, member: &CouncilMember, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, _phase: &Phase) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_member_start(&self, _phase: &Phase, _member: &CouncilMember) {}
    fn on_member_complete(&self, _phase: &Phase, _member: &CouncilMember, _success: bool) {}
}
