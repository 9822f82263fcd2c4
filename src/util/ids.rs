//! Shared identifiers and small value types used across the crate.
//!
//! Every cross-reference in the job graph is one of these ids. Resolving an
//! id is always a map lookup that may come back empty, which is how weak
//! references are expressed.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Stable identifier of a job inside a [`JobBoard`](crate::core::JobBoard).
    JobId,
    "Job"
);
id_type!(
    /// Identifier of the agent executing a job.
    AgentId,
    "Agent"
);
id_type!(
    /// Identifier of a world entity (creature, construction, ...).
    EntityId,
    "Entity"
);
id_type!(
    /// Identifier of a movable item.
    ItemId,
    "Item"
);
id_type!(
    /// Identifier of a stockpile owning storage spots.
    StockpileId,
    "Stockpile"
);
id_type!(
    /// Identifier of a container with capacity slots.
    ContainerId,
    "Container"
);

/// Tile coordinate in the world grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinate {
    /// Build a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Item category qualifier attached to a task (e.g. "any food").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemCategory(pub u32);

/// Job priority levels. Ordering follows urgency, so `VeryHigh > Low`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum JobPriority {
    /// Background work.
    Low,
    /// Regular work.
    #[default]
    Med,
    /// Urgent work.
    High,
    /// Drop-everything work.
    VeryHigh,
}
