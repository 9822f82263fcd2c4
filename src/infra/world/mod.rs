//! World resource backends.

pub mod memory;
