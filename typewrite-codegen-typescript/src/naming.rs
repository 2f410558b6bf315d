//! TypeScript-specific naming conventions.
//!
//! Interface properties keep the attribute key verbatim so the declared
//! shape matches the stored document. Keys that are not plain identifiers
//! are quoted; reserved words are valid property names and stay as is.

use typewrite_codegen::NamingConvention;
use typewrite_core::is_identifier;

use crate::ast::ts_str;

fn ts_property_name(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        ts_str(key)
    }
}

fn keep(name: &str) -> String {
    name.to_string()
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    field_to_name: ts_property_name,
    reserved_words: &[],
    escape_reserved: keep,
};
