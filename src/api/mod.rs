//! Serializable read models for UI and tooling.

pub mod snapshot;

pub use snapshot::{snapshot, BoardSnapshot, JobSnapshot, TaskSnapshot};
