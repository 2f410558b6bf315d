//! Code fragments and the Renderable trait.
//!
//! Declaration nodes render to fragments; a [`super::CodeBuilder`] turns
//! fragments into text with the target language's indentation.

/// How a comment fragment is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// text`
    Line,
    /// `/// text`
    RustDoc,
    /// `//! text`
    RustInnerDoc,
    /// `/** text */`
    JsDoc,
}

impl CommentStyle {
    pub fn render(&self, text: &str) -> String {
        match self {
            Self::Line => format!("// {}", text),
            Self::RustDoc => format!("/// {}", text),
            Self::RustInnerDoc => format!("//! {}", text),
            Self::JsDoc => format!("/** {} */", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line; a newline is appended.
    Line(String),
    Blank,
    /// Header line, indented body, optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Sequence(Vec<CodeFragment>),
    Comment(CommentStyle, String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }

    pub fn comment(style: CommentStyle, text: impl Into<String>) -> Self {
        Self::Comment(style, text.into())
    }
}

/// Types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
