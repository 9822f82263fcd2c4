//! Audit trail of job lifecycle and reservation events.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::clock::now_ms;
use crate::util::JobId;

/// What happened to a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Job added to the board.
    Created,
    /// Job marked successful.
    Completed,
    /// Job failed directly.
    Failed,
    /// Job failed because a child failed.
    CascadeFailed,
    /// Item claimed.
    ReservedItem,
    /// Item released.
    ReleasedItem,
    /// Stockpile spot claimed.
    ReservedSpot,
    /// Stockpile spot released.
    ReleasedSpot,
    /// Container slot claimed.
    ReservedSpace,
    /// Container slot released.
    ReleasedSpace,
    /// Connected entity told to drop the job.
    EntityNotified,
    /// Job torn down and dropped from the board.
    Destroyed,
}

impl AuditAction {
    /// Stable snake-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::CascadeFailed => "cascade_failed",
            Self::ReservedItem => "reserved_item",
            Self::ReleasedItem => "released_item",
            Self::ReservedSpot => "reserved_spot",
            Self::ReleasedSpot => "released_spot",
            Self::ReservedSpace => "reserved_space",
            Self::ReleasedSpace => "released_space",
            Self::EntityNotified => "entity_notified",
            Self::Destroyed => "destroyed",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Job the event is about.
    pub job_id: JobId,
    /// Job name at the time of the event.
    pub job_name: String,
    /// Action taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context, e.g. the resource involved.
    pub payload: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink keeping the newest events.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Stored events about one job, oldest first.
    pub fn events_for(&self, job: JobId) -> Vec<AuditEvent> {
        self.events
            .iter()
            .filter(|e| e.job_id == job)
            .cloned()
            .collect()
    }

    /// Number of stored events with the given action.
    pub fn count(&self, action: AuditAction) -> usize {
        self.events.iter().filter(|e| e.action == action).count()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event with a fresh id and timestamp.
pub fn build_audit_event(
    job_id: JobId,
    job_name: impl Into<String>,
    action: AuditAction,
    payload: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        job_id,
        job_name: job_name.into(),
        action,
        created_at_ms: now_ms(),
        payload,
    }
}
