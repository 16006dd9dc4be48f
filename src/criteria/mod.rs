//! Generation requests and their validation.
//!
//! A request is checked here before any randomness is consumed, so a
//! rejected request never draws from the random source.

mod request;

pub use request::{validate, GenerationCriteria, ValidationError, MAX_LENGTH, MIN_LENGTH};
