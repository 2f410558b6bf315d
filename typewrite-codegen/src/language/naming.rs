/// Language-specific naming rules for declared fields.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an attribute key into a field name.
    pub field_to_name: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn field_name(&self, key: &str) -> String {
        let transformed = (self.field_to_name)(key);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn suffix(s: &str) -> String {
        format!("{}_", s)
    }

    const UPPER: NamingConvention = NamingConvention {
        field_to_name: upper,
        reserved_words: &["IF"],
        escape_reserved: suffix,
    };

    #[test]
    fn test_field_name_transforms_then_escapes() {
        assert_eq!(UPPER.field_name("name"), "NAME");
        assert_eq!(UPPER.field_name("if"), "IF_");
        assert!(UPPER.is_reserved("IF"));
        assert!(!UPPER.is_reserved("if"));
    }
}
