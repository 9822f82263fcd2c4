//! Factories for canonical job shapes.

pub mod job_factory;

pub use job_factory::{build_job, move_job};
