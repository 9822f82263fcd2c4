//! The job entity: ordered tasks, completion state, retry gate and the
//! references it holds into the rest of the world.
//!
//! Every reference a job keeps (parent, prerequisites, reserved resources,
//! connected entity) is an id. Resolving one can come back empty at any time,
//! and an empty resolution always means "absent", never an error.
//!
//! Operations that must look across jobs or touch world resources live on
//! [`JobBoard`](crate::core::JobBoard): failure cascade, eligibility,
//! reservations and destruction.

use serde::{Deserialize, Serialize};

use crate::config::JobConfig;
use crate::core::task::Task;
use crate::util::{AgentId, ContainerId, Coordinate, EntityId, ItemId, JobId, JobPriority, StockpileId};

/// Completion state of a job. `Success` and `Failure` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    /// Still in progress.
    #[default]
    Ongoing,
    /// Finished successfully.
    Success,
    /// Finished unsuccessfully.
    Failure,
}

impl CompletionState {
    /// Whether the state is `Success` or `Failure`.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// The state after moving to `next`, or `None` if the move is illegal.
    ///
    /// Only `Ongoing` may move, and only to a terminal state.
    pub const fn transition(self, next: Self) -> Option<Self> {
        match (self, next) {
            (Self::Ongoing, Self::Success | Self::Failure) => Some(next),
            _ => None,
        }
    }
}

/// A schedulable unit of work.
#[derive(Debug, Clone)]
pub struct Job {
    name: String,
    priority: JobPriority,
    completion: CompletionState,
    zone: i32,
    menial: bool,
    paused: bool,
    pending_removal: bool,
    attempts: u32,
    attempt_limit: u32,
    assigned: Option<AgentId>,
    internal: bool,
    tasks: Vec<Task>,
    pub(crate) parent: Option<JobId>,
    pub(crate) prerequisites: Vec<JobId>,
    pub(crate) reserved_items: Vec<ItemId>,
    pub(crate) reserved_spot: Option<(StockpileId, Coordinate)>,
    pub(crate) reserved_space: Option<ContainerId>,
    pub(crate) connected_entity: Option<EntityId>,
}

impl Job {
    /// Create an ongoing, unassigned job with no tasks.
    pub fn new(config: JobConfig) -> Self {
        Self {
            name: config.name,
            priority: config.priority,
            completion: CompletionState::Ongoing,
            zone: config.zone,
            menial: config.menial,
            paused: false,
            pending_removal: false,
            attempts: 0,
            attempt_limit: config.attempt_limit,
            assigned: None,
            internal: config.internal,
            tasks: Vec::new(),
            parent: None,
            prerequisites: Vec::new(),
            reserved_items: Vec::new(),
            reserved_spot: None,
            reserved_space: None,
            connected_entity: None,
        }
    }

    /// Append a task to the end of the sequence.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Forget links, reservations and the connected entity. Only the board
    /// fills these in, so a job entering the board starts without them.
    pub(crate) fn detach(&mut self) {
        self.parent = None;
        self.prerequisites.clear();
        self.reserved_items.clear();
        self.reserved_spot = None;
        self.reserved_space = None;
        self.connected_entity = None;
    }

    /// Builder form of [`push_task`](Self::push_task).
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered task sequence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current priority.
    pub const fn priority(&self) -> JobPriority {
        self.priority
    }

    /// Change the priority.
    pub fn set_priority(&mut self, priority: JobPriority) {
        self.priority = priority;
    }

    /// Zone tag.
    pub const fn zone(&self) -> i32 {
        self.zone
    }

    /// Move the job to another zone.
    pub fn set_zone(&mut self, zone: i32) {
        self.zone = zone;
    }

    /// Low-skill work flag.
    pub const fn menial(&self) -> bool {
        self.menial
    }

    /// Whether the job is paused. Paused jobs are skipped, not failed.
    pub const fn paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume the job.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Synthetic sub-job hidden from top-level scheduling.
    pub const fn internal(&self) -> bool {
        self.internal
    }

    /// Mark or unmark the job as an internal sub-job.
    pub fn set_internal(&mut self, internal: bool) {
        self.internal = internal;
    }

    /// Assign the executing agent.
    pub fn assign(&mut self, agent: AgentId) {
        self.assigned = Some(agent);
    }

    /// Clear the executing agent.
    pub fn unassign(&mut self) {
        self.assigned = None;
    }

    /// Executing agent, if any.
    pub const fn assigned(&self) -> Option<AgentId> {
        self.assigned
    }

    /// Completion state.
    pub const fn completion(&self) -> CompletionState {
        self.completion
    }

    /// Whether the job reached `Success` or `Failure`.
    pub const fn completed(&self) -> bool {
        self.completion.is_terminal()
    }

    /// Mark the job successful.
    ///
    /// Does not cascade and does not release reservations. Returns `false`
    /// and leaves the state alone if the job had already finished.
    pub fn complete(&mut self) -> bool {
        self.finish(CompletionState::Success)
    }

    pub(crate) fn finish(&mut self, next: CompletionState) -> bool {
        match self.completion.transition(next) {
            Some(state) => {
                self.completion = state;
                true
            }
            None => false,
        }
    }

    /// Count one attempt and report whether it is still within the limit.
    ///
    /// Never changes the completion state. Callers decide whether an exhausted
    /// gate means failure.
    pub fn attempt(&mut self) -> bool {
        self.attempts = self.attempts.saturating_add(1);
        self.attempts <= self.attempt_limit
    }

    /// Attempts counted so far.
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts allowed before the gate closes.
    pub const fn attempt_limit(&self) -> u32 {
        self.attempt_limit
    }

    /// Change the attempt limit.
    pub fn set_attempt_limit(&mut self, limit: u32) {
        self.attempt_limit = limit;
    }

    /// Flag the job for reaping. Idempotent.
    pub fn remove(&mut self) {
        self.pending_removal = true;
    }

    /// Whether the job is waiting to be reaped.
    pub const fn removable(&self) -> bool {
        self.pending_removal
    }

    /// Parent job id. The parent may no longer exist.
    pub const fn parent(&self) -> Option<JobId> {
        self.parent
    }

    /// Prerequisite job ids in insertion order. Some may no longer exist.
    pub fn prerequisites(&self) -> &[JobId] {
        &self.prerequisites
    }

    /// Items this job has reserved.
    pub fn reserved_items(&self) -> &[ItemId] {
        &self.reserved_items
    }

    /// Stockpile spot this job has reserved.
    pub const fn reserved_spot(&self) -> Option<(StockpileId, Coordinate)> {
        self.reserved_spot
    }

    /// Container this job holds a capacity slot in.
    pub const fn reserved_space(&self) -> Option<ContainerId> {
        self.reserved_space
    }

    /// Entity notified when this job is destroyed.
    pub const fn connected_entity(&self) -> Option<EntityId> {
        self.connected_entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::Action;

    fn job() -> Job {
        Job::new(JobConfig::new("Haul"))
    }

    #[test]
    fn transitions_only_leave_ongoing() {
        use CompletionState::{Failure, Ongoing, Success};
        assert_eq!(Ongoing.transition(Success), Some(Success));
        assert_eq!(Ongoing.transition(Failure), Some(Failure));
        assert_eq!(Ongoing.transition(Ongoing), None);
        assert_eq!(Success.transition(Failure), None);
        assert_eq!(Failure.transition(Success), None);
    }

    #[test]
    fn complete_is_monotonic() {
        let mut job = job();
        assert!(!job.completed());
        assert!(job.complete());
        assert!(!job.complete());
        assert!(!job.finish(CompletionState::Failure));
        assert_eq!(job.completion(), CompletionState::Success);
    }

    #[test]
    fn attempt_gate_closes_after_limit() {
        let mut job = job();
        for _ in 0..5 {
            assert!(job.attempt());
        }
        assert!(!job.attempt());
        assert!(!job.attempt());
        assert_eq!(job.attempts(), 7);
        assert_eq!(job.completion(), CompletionState::Ongoing);
    }

    #[test]
    fn raising_the_limit_reopens_the_gate() {
        let mut job = Job::new(JobConfig::new("Haul").with_attempt_limit(1));
        assert!(job.attempt());
        assert!(!job.attempt());
        job.set_attempt_limit(3);
        assert!(job.attempt());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut job = job();
        job.remove();
        job.remove();
        assert!(job.removable());
    }

    #[test]
    fn assignment_round_trip() {
        let mut job = job();
        assert_eq!(job.assigned(), None);
        job.assign(AgentId(3));
        assert_eq!(job.assigned(), Some(AgentId(3)));
        job.unassign();
        assert_eq!(job.assigned(), None);
    }

    #[test]
    fn tasks_keep_insertion_order() {
        let job = job()
            .with_task(Task::new(Action::Take, Coordinate::new(1, 1)))
            .with_task(Task::new(Action::Drop, Coordinate::new(2, 2)));
        let actions: Vec<_> = job.tasks().iter().map(Task::action).collect();
        assert_eq!(actions, vec![Action::Take, Action::Drop]);
    }
}
