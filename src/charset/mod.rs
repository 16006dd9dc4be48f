//! Character categories and alphabet construction.
//!
//! Each category has a fixed canonical alphabet. Alphabet sizes feed
//! straight into entropy figures, so they must not change silently.

mod category;
mod spec;

pub use category::{CharCategory, SYMBOLS};
pub use spec::CharsetSpec;
