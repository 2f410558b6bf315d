//! Rust-specific naming conventions.

use typewrite_codegen::NamingConvention;
use typewrite_core::{is_identifier, to_snake_case};

fn field_to_rust_name(key: &str) -> String {
    let name = to_snake_case(key);
    if is_identifier(&name) {
        name
    } else {
        format!("_{}", name)
    }
}

fn escape_rust_reserved(name: &str) -> String {
    match name {
        // Not allowed as raw identifiers.
        "crate" | "self" | "Self" | "super" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    field_to_name: field_to_rust_name,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
        "gen",
    ],
    escape_reserved: escape_rust_reserved,
};
