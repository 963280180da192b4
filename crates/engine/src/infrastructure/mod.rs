//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus
//! configuration and logging setup.

pub mod clock;
pub mod config;
pub mod memory;
pub mod ports;
pub mod sqlite_event_store;
pub mod telemetry;
