//! Shared helpers used by several operations

pub mod fs;
