//! JSON configuration types for the demo tools.

pub mod flow;
