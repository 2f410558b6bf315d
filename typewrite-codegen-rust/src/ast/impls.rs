//! Rust impl block builder.

use typewrite_codegen::{CodeBuilder, CodeFragment, Renderable};

/// An associated constant inside an impl block.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }

    fn format(&self) -> String {
        format!("const {}: {} = {};", self.name, self.ty, self.value)
    }
}

/// Builder for Rust impl blocks holding associated constants.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    consts: Vec<Const>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            consts: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn constant(mut self, constant: Const) -> Self {
        self.consts.push(constant);
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        match &self.trait_name {
            Some(trait_name) => format!("impl {} for {} {{", trait_name, self.type_name),
            None => format!("impl {} {{", self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.consts.is_empty() {
            return vec![CodeFragment::Line(format!("{}}}", self.format_header()))];
        }
        vec![CodeFragment::block(
            self.format_header(),
            self.consts
                .iter()
                .map(|c| CodeFragment::Line(c.format()))
                .collect(),
            "}",
        )]
    }
}
