//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Aggregate storage (in-memory today, could swap to a database)
//! - Event streams (in-memory or SQLite)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{EventStore, GameRepo, InningPlayRepo, LineupRepo};

// =============================================================================
// Event Store Types
// =============================================================================
pub use types::{stream_id, StoredEvent, StreamAppend};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockEventStore, MockGameRepo, MockInningPlayRepo, MockLineupRepo};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
