use crate::types::{FieldType, ModuleDecl, ScalarType};

/// A declaration emitter for one target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g. "rust", "typescript")
    fn language(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    /// Output path used when none is given.
    fn default_output(&self) -> &'static str;

    /// Render the whole module as one file.
    fn render(&self, module: &ModuleDecl) -> String;

    fn preview(&self, module: &ModuleDecl, path: &str) -> PreviewFile {
        PreviewFile {
            path: path.to_string(),
            content: self.render(module),
        }
    }
}

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Maps field types to language-specific type strings.
pub trait TypeMapper {
    fn language(&self) -> &'static str;

    fn map_scalar(&self, scalar: ScalarType) -> &'static str;

    /// Type of a single reference to a declared record.
    fn map_reference(&self, name: &str) -> String {
        name.to_string()
    }

    fn map_many(&self, inner: &str) -> String;

    fn map_field_type(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Scalar(scalar) => self.map_scalar(*scalar).to_string(),
            FieldType::Reference(name) => self.map_reference(name),
            FieldType::Many(inner) => {
                // Elements of a collection are never boxed.
                let inner = match inner.as_ref() {
                    FieldType::Reference(name) => name.clone(),
                    other => self.map_field_type(other),
                };
                self.map_many(&inner)
            }
        }
    }
}
