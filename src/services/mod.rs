//! Business logic services.
//!
//! Services contain the account mutations, separated from HTTP handlers.

pub mod banking;
pub mod coerce;
