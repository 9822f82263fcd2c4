//! Tests for audit sink

use colony_jobs::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};
use colony_jobs::util::JobId;

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(
        JobId(1),
        "Haul",
        AuditAction::ReservedItem,
        Some("Item#3".to_string()),
    );

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].job_id, JobId(1));
    assert_eq!(events[0].action, AuditAction::ReservedItem);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(JobId(1), "a", AuditAction::Created, None));
    sink.record(build_audit_event(JobId(2), "b", AuditAction::Created, None));
    sink.record(build_audit_event(JobId(3), "c", AuditAction::Failed, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].job_id, JobId(2)); // First one popped
    assert_eq!(events[1].job_id, JobId(3));
    assert_eq!(sink.count(AuditAction::Created), 1);
}

#[test]
fn test_zero_capacity_sink_keeps_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event(JobId(1), "a", AuditAction::Created, None));
    assert!(sink.events().is_empty());
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(
        JobId(7),
        "Build",
        AuditAction::EntityNotified,
        Some("Entity#2".to_string()),
    );
    let other = build_audit_event(JobId(7), "Build", AuditAction::Destroyed, None);

    assert_ne!(event.event_id, other.event_id);
    assert_eq!(event.job_name, "Build");
    assert_eq!(event.payload, Some("Entity#2".to_string()));
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_audit_action_names() {
    assert_eq!(AuditAction::CascadeFailed.to_string(), "cascade_failed");
    let json = serde_json::to_string(&AuditAction::ReleasedSpace).unwrap();
    assert_eq!(json, "\"released_space\"");
}
