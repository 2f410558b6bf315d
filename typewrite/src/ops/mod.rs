//! Core operations.
//!
//! Business logic for typewrite commands, separated from CLI argument
//! parsing and output rendering.

pub mod generate;
pub mod introspect;

pub use generate::{GenerateOptions, generate};
pub use introspect::introspect;
