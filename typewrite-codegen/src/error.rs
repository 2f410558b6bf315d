use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Two collections resolve to the same declared type name even after
    /// prefixing the database id.
    #[error("collections '{first}' and '{second}' both declare type '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },
}
