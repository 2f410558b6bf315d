//! CodeFile abstraction for structured TypeScript file generation.

use typewrite_codegen::{CodeBuilder, CodeFragment, CommentStyle, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Sections are rendered in order (header comment, imports, body) with a
/// blank line between sections and between body elements.
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the leading `//` comment.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        if !self.header.is_empty() {
            sections.push(
                self.header
                    .iter()
                    .map(|line| CodeFragment::comment(CommentStyle::Line, line))
                    .collect(),
            );
        }
        if !self.imports.is_empty() {
            sections.push(self.imports.iter().flat_map(|i| i.to_fragments()).collect());
        }
        sections.extend(self.body.iter().cloned());

        let mut builder = CodeBuilder::typescript();
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in section {
                builder.emit(fragment);
            }
        }
        builder.build()
    }
}
