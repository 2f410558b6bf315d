//! Language-agnostic declarations produced by the pipeline.

use typewrite_schema::AttributeType;

/// Scalar field types every target language can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    /// Placeholder for attribute types without a fixed mapping.
    Dynamic,
}

/// Map an attribute type to its scalar type.
///
/// Relationship attributes have no scalar form and map to `None`; the
/// lowering phase resolves them to references instead.
pub fn scalar_type(kind: &AttributeType) -> Option<ScalarType> {
    let scalar = match kind {
        AttributeType::String
        | AttributeType::Email
        | AttributeType::Enum
        | AttributeType::Url
        | AttributeType::Ip => ScalarType::String,
        AttributeType::Integer => ScalarType::Integer,
        AttributeType::Float => ScalarType::Float,
        AttributeType::Boolean => ScalarType::Boolean,
        AttributeType::Datetime => ScalarType::DateTime,
        AttributeType::Relationship => return None,
        AttributeType::Other(_) => ScalarType::Dynamic,
    };
    Some(scalar)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// Reference to another declared record, by planned type name.
    Reference(String),
    /// Collection of the inner type.
    Many(Box<FieldType>),
}

impl FieldType {
    pub fn many(inner: FieldType) -> Self {
        Self::Many(Box::new(inner))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Attribute key as stored in the database.
    pub key: String,
    pub ty: FieldType,
    pub optional: bool,
}

/// One declared record per collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDecl {
    pub name: String,
    pub database_id: String,
    pub collection_id: String,
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub collection_id: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseEntry {
    pub database_id: String,
    pub collections: Vec<CollectionEntry>,
}

/// Everything an emitter renders into one output file, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDecl {
    pub records: Vec<RecordDecl>,
    pub map: Vec<DatabaseEntry>,
}
