//! Shared naming helpers for code generation.

/// Replace every character outside `[A-Za-z0-9]` with `_`
/// (e.g., "Expense attachments" -> "Expense_attachments")
pub fn sanitize_type_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Derive a declared type name from a collection display name
/// (e.g., "auth tokens" -> "Auth_tokens")
pub fn collection_type_name(display_name: &str) -> String {
    capitalize_first(&sanitize_type_name(display_name))
}

/// Whether `s` is a plain ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Convert a string to snake_case (e.g., "expenseAttachments" -> "expense_attachments")
///
/// Runs of capitals stay together ("userID" -> "user_id") and any
/// non-alphanumeric character becomes an underscore.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase()
                && matches!(prev, Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push('_');
        }
        prev = Some(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_type_name() {
        assert_eq!(sanitize_type_name("posts"), "posts");
        assert_eq!(sanitize_type_name("Expense attachments"), "Expense_attachments");
        assert_eq!(sanitize_type_name("auth-tokens.v2"), "auth_tokens_v2");
        assert_eq!(sanitize_type_name("café"), "caf_");
        assert_eq!(sanitize_type_name(""), "");
    }

    #[test]
    fn test_collection_type_name() {
        assert_eq!(collection_type_name("tags"), "Tags");
        assert_eq!(collection_type_name("auth tokens"), "Auth_tokens");
        assert_eq!(collection_type_name("Member Categories"), "Member_Categories");
        assert_eq!(collection_type_name("24so"), "24so");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Posts"));
        assert!(is_identifier("_24so"));
        assert!(!is_identifier("24so"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("my-key"));
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("title"), "title");
        assert_eq!(to_snake_case("Name"), "name");
        assert_eq!(to_snake_case("expenseAttachments"), "expense_attachments");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("sub_total"), "sub_total");
        assert_eq!(to_snake_case("zip-code"), "zip_code");
        assert_eq!(to_snake_case(""), "");
    }
}
