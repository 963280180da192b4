//! Lineup use cases.

mod error;
mod substitute;

pub use error::SubstituteError;
pub use substitute::{SubstitutePlayer, SubstitutionInput};
