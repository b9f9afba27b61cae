pub mod domain;
pub mod error;
pub mod roster;
pub mod time;

pub use domain::*;
pub use error::ValidationError;
pub use roster::{ContactRoster, RosterError};
