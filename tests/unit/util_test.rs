//! Tests for utility functions

use colony_jobs::core::{describe, Action, UNKNOWN_ACTION_LABEL};
use colony_jobs::util::{now_ms, Coordinate, ItemId, JobId, JobPriority};

#[test]
fn test_priority_ordering() {
    assert!(JobPriority::VeryHigh > JobPriority::High);
    assert!(JobPriority::High > JobPriority::Med);
    assert!(JobPriority::Med > JobPriority::Low);
    assert_eq!(JobPriority::default(), JobPriority::Med);
}

#[test]
fn test_id_display() {
    assert_eq!(JobId(3).to_string(), "Job#3");
    assert_eq!(ItemId(0).to_string(), "Item#0");
    assert_eq!(Coordinate::new(-2, 5).to_string(), "(-2, 5)");
}

#[test]
fn test_action_labels() {
    assert_eq!(describe(Action::Move), "Move");
    assert_eq!(describe(Action::MoveAdjacent), "Move adjacent");
    assert_eq!(describe(Action::Take), "Pick up");
    assert_eq!(describe(Action::PutIn), "Put in");
    assert_eq!(describe(Action::Fell), UNKNOWN_ACTION_LABEL);
    assert_eq!(Action::Wait.to_string(), "???");
}

#[test]
fn test_clock_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(b >= a);
    assert!(a > 0);
}
