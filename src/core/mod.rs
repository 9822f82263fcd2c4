//! Job graph, dependency resolution and reservation bookkeeping.

pub mod audit;
pub mod board;
pub mod error;
pub mod job;
pub mod ledger;
pub mod task;
pub mod world;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use board::JobBoard;
pub use error::{AppResult, JobError};
pub use job::{CompletionState, Job};
pub use ledger::{Claim, ReservationLedger};
pub use task::{describe, Action, Task, UNKNOWN_ACTION_LABEL};
pub use world::{Construction, WorldResources};
