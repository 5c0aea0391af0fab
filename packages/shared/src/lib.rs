//! Utilities shared by the Skirmish binaries.

pub mod logger;
pub mod time;
