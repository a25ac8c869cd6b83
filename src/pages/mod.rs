//! Top-level routed pages.

pub mod assistant;
pub mod plan;
