//! Core utilities for the typewrite generator.
//!
//! This crate provides the naming helpers and the generated-file writer
//! shared by the code generation crates.

mod file;
mod utils;

pub use file::{File, WriteResult};
pub use utils::{
    capitalize_first, collection_type_name, is_identifier, sanitize_type_name, to_snake_case,
};
