//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with a header,
//! organized imports and body content.

use typewrite_codegen::{CodeBuilder, CodeFragment, CommentStyle, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
    is_public: bool,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
            is_public: false,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Make this a `pub use` re-export.
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    fn format(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        match self.symbols.as_slice() {
            [] => format!("{}use {};", vis, self.module),
            [symbol] => format!("{}use {}::{};", vis, self.module, symbol),
            symbols => format!("{}use {}::{{{}}};", vis, self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// Sections are rendered in order: header comment, inner attributes, `use`
/// statements, `pub use` re-exports, then body elements separated by blank
/// lines.
///
/// ```ignore
/// let file = RustFile::new()
///     .header("Generated by typewrite.")
///     .use_stmt(Use::new("serde").symbols(["Deserialize", "Serialize"]))
///     .add(my_struct)
///     .render();
/// ```
#[derive(Default)]
pub struct RustFile {
    header: Vec<String>,
    inner_attrs: Vec<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the leading `//` comment.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add a crate-level attribute, e.g. `allow(dead_code)`.
    pub fn inner_attr(mut self, attr: impl Into<String>) -> Self {
        self.inner_attrs.push(attr.into());
        self
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.inner_attrs.is_empty()
            && self.uses.is_empty()
            && self.body.is_empty()
    }

    pub fn render(&self) -> String {
        let (uses, reexports): (Vec<&Use>, Vec<&Use>) =
            self.uses.iter().partition(|u| !u.is_public);

        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        if !self.header.is_empty() {
            sections.push(
                self.header
                    .iter()
                    .map(|line| CodeFragment::comment(CommentStyle::Line, line))
                    .collect(),
            );
        }
        if !self.inner_attrs.is_empty() {
            sections.push(
                self.inner_attrs
                    .iter()
                    .map(|attr| CodeFragment::Line(format!("#![{}]", attr)))
                    .collect(),
            );
        }
        for group in [uses, reexports] {
            if !group.is_empty() {
                sections.push(group.iter().flat_map(|u| u.to_fragments()).collect());
            }
        }
        sections.extend(self.body.iter().cloned());

        let mut builder = CodeBuilder::rust();
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
