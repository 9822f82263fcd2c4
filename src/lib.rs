//! # Colony Jobs
//!
//! Hierarchical job scheduling and resource reservation for colony
//! simulations.
//!
//! A job is an ordered list of primitive tasks (move, take, build, ...) that
//! an agent executes. Jobs form a graph: a job may have a parent it works
//! for and prerequisites that must finish first. While it runs, a job holds
//! exclusive claims on world resources so two agents never fight over the
//! same item, storage spot or container slot.
//!
//! ## Key Features
//!
//! - **Weak References**: Jobs point at each other and at world resources by
//!   id. A reference that no longer resolves is simply absent.
//! - **Failure Cascade**: Failing a job fails its whole parent chain, guarded
//!   against cycles and runaway depth.
//! - **Reservations**: Items and spots are exclusive, containers hand out
//!   counted slots. Every claim is released exactly once on teardown.
//! - **Pluggable World**: The board talks to the simulation through the
//!   [`WorldResources`](core::WorldResources) trait.
//! - **Audit Trail**: Lifecycle and reservation events can be recorded to an
//!   [`AuditSink`](core::AuditSink).
//!
//! ## Usage
//!
//! ```rust
//! use colony_jobs::builders::move_job;
//! use colony_jobs::config::JobConfig;
//! use colony_jobs::core::{CompletionState, JobBoard};
//! use colony_jobs::infra::world::memory::InMemoryWorld;
//! use colony_jobs::util::{Coordinate, JobPriority};
//!
//! let mut board = JobBoard::new(InMemoryWorld::new());
//! let stock = board
//!     .create(JobConfig::new("Stock up").with_priority(JobPriority::Low))
//!     .unwrap();
//! let fetch = board.insert(move_job(Coordinate::new(3, 7)));
//! board.set_parent(fetch, stock).unwrap();
//!
//! board.fail(fetch).unwrap();
//! assert_eq!(board.get(stock).unwrap().completion(), CompletionState::Failure);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Job graph, failure cascade and reservation bookkeeping.
pub mod core;
/// Configuration models for jobs and boards.
pub mod config;
/// Factories for commonly used job shapes.
pub mod builders;
/// World backends the board reserves resources in.
pub mod infra;
/// Serializable read models for UI and tooling.
pub mod api;
/// Shared utilities.
pub mod util;
