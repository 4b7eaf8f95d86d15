//! CLI command implementations.
//!
//! Each command writes to the writer it is given so it can be tested
//! without capturing stdout.

pub mod get;
pub mod show;
pub mod sources;
