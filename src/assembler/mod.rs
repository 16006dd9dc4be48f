//! Password assembly.
//!
//! Turns a [`CharsetSpec`](crate::charset::CharsetSpec) and a random
//! source into a password that contains every enabled category.

mod assemble;
mod password;

pub use assemble::assemble;
pub use password::GeneratedPassword;
