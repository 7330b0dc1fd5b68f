//! Shared utilities for the DelPresence client.
//!
//! - [`tracing`]: span macros and span recording helpers

pub mod tracing;
