//! Tests for builder modules

use colony_jobs::builders::{build_job, move_job};
use colony_jobs::core::{Action, CompletionState, Construction};
use colony_jobs::util::{Coordinate, EntityId, JobPriority};

#[test]
fn test_move_job_shape() {
    let job = move_job(Coordinate::new(3, -1));
    assert_eq!(job.name(), "Move");
    assert_eq!(job.tasks().len(), 1);
    assert_eq!(job.tasks()[0].action(), Action::Move);
    assert_eq!(job.tasks()[0].target(), Coordinate::new(3, -1));
    assert_eq!(job.tasks()[0].entity(), None);
}

#[test]
fn test_build_job_shape() {
    let site = Construction {
        id: EntityId(12),
        position: Coordinate::new(4, 9),
    };
    let job = build_job(&site);

    assert_eq!(job.name(), "Build");
    let actions: Vec<Action> = job.tasks().iter().map(|t| t.action()).collect();
    assert_eq!(actions, vec![Action::MoveAdjacent, Action::Build]);
    for task in job.tasks() {
        assert_eq!(task.target(), site.position);
        assert_eq!(task.entity(), Some(site.id));
    }
}

#[test]
fn test_factory_jobs_start_fresh() {
    let job = move_job(Coordinate::new(0, 0));
    assert_eq!(job.completion(), CompletionState::Ongoing);
    assert_eq!(job.priority(), JobPriority::Med);
    assert_eq!(job.attempts(), 0);
    assert!(job.assigned().is_none());
    assert!(!job.removable());
}
