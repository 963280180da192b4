//! Scoring rules that credit players for a play.

mod rbi;

pub use rbi::rbi_for;
