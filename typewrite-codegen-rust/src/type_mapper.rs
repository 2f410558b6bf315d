//! Rust type mapper implementation.

use typewrite_codegen::{FieldDecl, ScalarType, TypeMapper};

/// Maps declared field types to Rust type syntax.
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Full field type, wrapped in `Option` when the attribute is optional.
    pub fn map_field(&self, field: &FieldDecl) -> String {
        let ty = self.map_field_type(&field.ty);
        if field.optional {
            format!("Option<{}>", ty)
        } else {
            ty
        }
    }
}

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String => "String",
            ScalarType::Integer => "i64",
            ScalarType::Float => "f64",
            ScalarType::Boolean => "bool",
            ScalarType::DateTime => "chrono::DateTime<chrono::Utc>",
            ScalarType::Dynamic => "serde_json::Value",
        }
    }

    // Records may reference each other, including themselves.
    fn map_reference(&self, name: &str) -> String {
        format!("Box<{}>", name)
    }

    fn map_many(&self, inner: &str) -> String {
        format!("Vec<{}>", inner)
    }
}

#[cfg(test)]
mod tests {
    use typewrite_codegen::FieldType;

    use super::*;

    #[test]
    fn test_rust_scalar_types() {
        let mapper = RustTypeMapper;

        assert_eq!(mapper.map_scalar(ScalarType::String), "String");
        assert_eq!(mapper.map_scalar(ScalarType::Integer), "i64");
        assert_eq!(mapper.map_scalar(ScalarType::Float), "f64");
        assert_eq!(mapper.map_scalar(ScalarType::Boolean), "bool");
        assert_eq!(
            mapper.map_scalar(ScalarType::DateTime),
            "chrono::DateTime<chrono::Utc>"
        );
        assert_eq!(mapper.map_scalar(ScalarType::Dynamic), "serde_json::Value");
    }

    #[test]
    fn test_rust_field_types() {
        let mapper = RustTypeMapper;
        let field = |ty, optional| FieldDecl {
            key: "f".to_string(),
            ty,
            optional,
        };

        assert_eq!(
            mapper.map_field(&field(FieldType::Scalar(ScalarType::Integer), false)),
            "i64"
        );
        assert_eq!(
            mapper.map_field(&field(FieldType::Reference("Profiles".to_string()), true)),
            "Option<Box<Profiles>>"
        );
        assert_eq!(
            mapper.map_field(&field(
                FieldType::many(FieldType::Reference("Tags".to_string())),
                true
            )),
            "Option<Vec<Tags>>"
        );
        assert_eq!(
            mapper.map_field(&field(
                FieldType::many(FieldType::Scalar(ScalarType::String)),
                false
            )),
            "Vec<String>"
        );
    }
}
