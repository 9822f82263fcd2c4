//! Error types for job board operations.
//!
//! The job contract itself has no error path: dangling references are absent,
//! and failure is a completion state. These errors only cover calls addressed
//! at a job that is not on the board, illegal graph links, and configuration.

use thiserror::Error;

use crate::util::JobId;

/// Errors produced by the job board and its configuration.
#[derive(Debug, Error)]
pub enum JobError {
    /// The job addressed by the call is not on the board.
    #[error("unknown job: {0}")]
    UnknownJob(JobId),
    /// A job cannot be its own parent or prerequisite.
    #[error("{0} cannot reference itself")]
    SelfReference(JobId),
    /// Linking the parent would close a loop in the parent chain.
    #[error("linking {child} under {parent} would create a parent cycle")]
    ParentCycle {
        /// Job receiving the parent link.
        child: JobId,
        /// Proposed parent.
        parent: JobId,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
