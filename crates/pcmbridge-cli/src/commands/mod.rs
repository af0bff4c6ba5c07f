//! CLI command implementations

pub mod header;
pub mod render;
