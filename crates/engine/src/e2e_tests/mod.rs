//! End-to-end tests.
//!
//! These play whole games through a fully wired [`crate::App`]: in-memory
//! repositories, and either the in-memory or the SQLite event store.
//!
//! ```bash
//! cargo test -p dugout-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
