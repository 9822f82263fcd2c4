//! Infrastructure adapters for the world boundary.

pub mod world;
