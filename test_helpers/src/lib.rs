//! Test helpers shared across crates.
//!
//! Provides invocation counters, a capturing log sink, text helpers for
//! building multi-line values, and a single-threaded executor with an explicit
//! suspension point.

pub mod calls;
pub mod executor;
pub mod log;
pub mod text;
