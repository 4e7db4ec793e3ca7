//! Built-in rules.

pub mod identifier_length;

pub use identifier_length::{AllowList, IdentifierLengthRule};
