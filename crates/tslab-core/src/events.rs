use crate::sandbox::ExecutionOutcome;

/// Message sent from a run worker back to its playground controller. The
/// controller compares `seq` against the live generation and discards
/// stale events, so a slow earlier run can never overwrite a newer result.
#[derive(Debug, Clone)]
pub struct RunEvent {
    pub seq: u64,
    pub outcome: ExecutionOutcome,
}
