//! Canonical jobs for common intents.
//!
//! These are templates; schedulers are free to assemble jobs by hand with
//! [`Job::new`] and [`Job::push_task`].

use crate::config::JobConfig;
use crate::core::task::{Action, Task};
use crate::core::world::Construction;
use crate::core::Job;
use crate::util::Coordinate;

/// Single-step job walking onto `target`.
pub fn move_job(target: Coordinate) -> Job {
    Job::new(JobConfig::new("Move")).with_task(Task::new(Action::Move, target))
}

/// Walk next to a construction site, then work on it.
///
/// Both steps target the site's tile and carry the construction entity.
pub fn build_job(construction: &Construction) -> Job {
    let site = construction.position;
    Job::new(JobConfig::new("Build"))
        .with_task(Task::new(Action::MoveAdjacent, site).with_entity(construction.id))
        .with_task(Task::new(Action::Build, site).with_entity(construction.id))
}
