use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// ```
/// use typewrite_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export interface Post {")
///     .indent()
///     .line("title: string;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export interface Post {\n  title: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(&self.unit);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Emit a renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    /// Emit nodes separated by blank lines.
    pub fn emit_separated<R: Renderable>(&mut self, nodes: &[R]) -> &mut Self {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.push_blank();
            }
            self.emit(node);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply(f);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply(f);
                }
            }
            CodeFragment::Comment(style, text) => {
                self.push_line(&style.render(&text));
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CommentStyle;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::rust().line("pub type Id = String;").build();
        assert_eq!(code, "pub type Id = String;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&CodeFragment::block(
            "export type DatabaseMap = {",
            vec![CodeFragment::block(
                "'app': {",
                vec![CodeFragment::line("'posts': Posts;")],
                "},",
            )],
            "};",
        ));

        assert_eq!(
            builder.build(),
            "export type DatabaseMap = {\n  'app': {\n    'posts': Posts;\n  },\n};\n"
        );
    }

    #[test]
    fn test_emit_separated() {
        let nodes = vec![CodeFragment::line("a"), CodeFragment::line("b")];
        let mut builder = CodeBuilder::rust();
        builder.emit_separated(&nodes);
        assert_eq!(builder.build(), "a\n\nb\n");
    }

    #[test]
    fn test_comment_fragment_is_indented() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().emit(&CodeFragment::comment(CommentStyle::RustDoc, "doc"));
        assert_eq!(builder.build(), "    /// doc\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::rust().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }
}
