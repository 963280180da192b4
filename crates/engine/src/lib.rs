//! Dugout engine library.
//!
//! Coordinates the domain aggregates one at-bat at a time and persists the
//! resulting events.
//!
//! ## Structure
//!
//! - `use_cases/` - At-bat coordination and the game and lineup use cases
//! - `infrastructure/` - Ports and their adapters (in-memory, SQLite), config, tracing
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests that play games through the in-memory app.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
