//! Configuration models for jobs and the job board.

pub mod board;

pub use board::{BoardConfig, JobConfig, DEFAULT_ATTEMPT_LIMIT};
