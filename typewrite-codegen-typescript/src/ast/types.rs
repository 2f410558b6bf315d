//! TypeScript type alias builder.

use typewrite_codegen::{CodeBuilder, CodeFragment, Renderable};

/// The right-hand side of a type alias.
#[derive(Debug, Clone)]
enum AliasBody {
    /// `A | B | C`, one member per line.
    Union(Vec<String>),
    /// `{ ... }` with pre-rendered member fragments.
    Object(Vec<CodeFragment>),
}

/// Builder for exported `type` aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    body: AliasBody,
}

impl TypeAlias {
    /// A union alias; members are written as given.
    pub fn union(
        name: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            body: AliasBody::Union(members.into_iter().map(Into::into).collect()),
        }
    }

    /// An object alias with the given member fragments.
    pub fn object(name: impl Into<String>, members: Vec<CodeFragment>) -> Self {
        Self {
            name: name.into(),
            body: AliasBody::Object(members),
        }
    }

    /// Build the alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.body {
            AliasBody::Union(members) if members.is_empty() => {
                vec![CodeFragment::Line(format!("export type {} = never;", self.name))]
            }
            AliasBody::Union(members) => {
                let last = members.len() - 1;
                let lines = members
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        let end = if i == last { ";" } else { "" };
                        CodeFragment::Line(format!("| {}{}", m, end))
                    })
                    .collect();
                vec![CodeFragment::Block {
                    header: format!("export type {} =", self.name),
                    body: lines,
                    close: None,
                }]
            }
            AliasBody::Object(members) if members.is_empty() => {
                vec![CodeFragment::Line(format!("export type {} = {{}};", self.name))]
            }
            AliasBody::Object(members) => vec![CodeFragment::block(
                format!("export type {} = {{", self.name),
                members.clone(),
                "};",
            )],
        }
    }
}
