//! TypeScript type mapper implementation.

use typewrite_codegen::{ScalarType, TypeMapper};

/// Maps declared field types to TypeScript type syntax.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String => "string",
            ScalarType::Integer | ScalarType::Float => "number",
            ScalarType::Boolean => "boolean",
            ScalarType::DateTime => "Date",
            ScalarType::Dynamic => "any",
        }
    }

    fn map_many(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }
}
