//! Point-in-time views of the board.

use serde::{Deserialize, Serialize};

use crate::core::task::{describe, Action, Task};
use crate::core::world::WorldResources;
use crate::core::{CompletionState, Job, JobBoard};
use crate::util::{AgentId, Coordinate, EntityId, JobId, JobPriority};

/// One task with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Action kind.
    pub action: Action,
    /// Human-readable action label.
    pub label: String,
    /// Target tile.
    pub target: Coordinate,
    /// Entity acted on.
    pub entity: Option<EntityId>,
}

impl From<&Task> for TaskSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            action: task.action(),
            label: describe(task.action()).to_owned(),
            target: task.target(),
            entity: task.entity(),
        }
    }
}

/// Scheduler-facing view of one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    /// Job identifier.
    pub id: JobId,
    /// Job name.
    pub name: String,
    /// Priority.
    pub priority: JobPriority,
    /// Completion state.
    pub completion: CompletionState,
    /// Zone tag.
    pub zone: i32,
    /// Low-skill work flag.
    pub menial: bool,
    /// Paused flag.
    pub paused: bool,
    /// Waiting to be reaped.
    pub removable: bool,
    /// Executing agent.
    pub assigned: Option<AgentId>,
    /// Attempts so far.
    pub attempts: u32,
    /// Reserved item count.
    pub reserved_items: usize,
    /// Task sequence.
    pub tasks: Vec<TaskSnapshot>,
}

impl JobSnapshot {
    /// Capture a job.
    pub fn capture(id: JobId, job: &Job) -> Self {
        Self {
            id,
            name: job.name().to_owned(),
            priority: job.priority(),
            completion: job.completion(),
            zone: job.zone(),
            menial: job.menial(),
            paused: job.paused(),
            removable: job.removable(),
            assigned: job.assigned(),
            attempts: job.attempts(),
            reserved_items: job.reserved_items().len(),
            tasks: job.tasks().iter().map(TaskSnapshot::from).collect(),
        }
    }
}

/// View of every job on a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Visible jobs, highest priority first, then by id.
    pub jobs: Vec<JobSnapshot>,
    /// Internal sub-jobs left out of `jobs`.
    pub hidden_internal: usize,
}

/// Capture the board, leaving out internal sub-jobs unless asked for.
pub fn snapshot<W: WorldResources>(board: &JobBoard<W>, include_internal: bool) -> BoardSnapshot {
    let mut out = BoardSnapshot::default();
    for (id, job) in board.iter() {
        if job.internal() && !include_internal {
            out.hidden_internal += 1;
            continue;
        }
        out.jobs.push(JobSnapshot::capture(id, job));
    }
    out.jobs
        .sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id)));
    out
}
