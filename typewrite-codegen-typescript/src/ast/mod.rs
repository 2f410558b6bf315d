//! TypeScript AST builders for imports, interfaces and type aliases.

mod imports;
mod interface;
mod types;

pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use types::TypeAlias;

/// Quote a string as a single-quoted TypeScript literal.
pub(crate) fn ts_str(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_str_escapes() {
        assert_eq!(ts_str("app"), "'app'");
        assert_eq!(ts_str("it's"), "'it\\'s'");
    }
}
