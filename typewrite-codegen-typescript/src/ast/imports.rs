//! TypeScript import builder.

use typewrite_codegen::{CodeFragment, Renderable};

use super::ts_str;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn format(&self) -> String {
        if self.named.is_empty() {
            format!("import {};", ts_str(&self.from))
        } else {
            format!(
                "import {{ {} }} from {};",
                self.named.join(", "),
                ts_str(&self.from)
            )
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        assert_eq!(
            Import::new("node-appwrite").named("Models").format(),
            "import { Models } from 'node-appwrite';"
        );
    }

    #[test]
    fn test_multiple_named_imports() {
        assert_eq!(
            Import::new("node-appwrite")
                .named("Models")
                .named("Query")
                .format(),
            "import { Models, Query } from 'node-appwrite';"
        );
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("./setup").format(), "import './setup';");
    }
}
