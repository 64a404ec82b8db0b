// Core data models for prodtrack
// These structs represent the production catalog and task lifecycle

pub mod status;
pub mod phase;

pub use status::*;
pub use phase::*;
