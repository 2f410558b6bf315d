//! Collection attribute descriptors.

use serde::{Deserialize, Serialize};

/// Attribute type reported by the database.
///
/// Appwrite reports formatted strings either as their own type or as
/// `string` with a `format`; both decode to the same variant. Types this
/// crate does not know about are kept verbatim in [`AttributeType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeType {
    String,
    Integer,
    Boolean,
    Float,
    Email,
    Enum,
    Url,
    Datetime,
    Ip,
    Relationship,
    Other(String),
}

impl AttributeType {
    /// Decode a wire `type` together with its optional `format`.
    pub fn from_wire(ty: &str, format: Option<&str>) -> Self {
        let base = Self::from_name(ty);
        match (&base, format) {
            (AttributeType::String, Some(format)) => match Self::from_name(format) {
                AttributeType::Other(_) => base,
                formatted => formatted,
            },
            _ => base,
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "float" | "double" => Self::Float,
            "email" => Self::Email,
            "enum" => Self::Enum,
            "url" => Self::Url,
            "datetime" => Self::Datetime,
            "ip" => Self::Ip,
            "relationship" => Self::Relationship,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the wire name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Email => "email",
            Self::Enum => "enum",
            Self::Url => "url",
            Self::Datetime => "datetime",
            Self::Ip => "ip",
            Self::Relationship => "relationship",
            Self::Other(name) => name,
        }
    }
}

/// Cardinality of a relationship attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationType {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl RelationType {
    /// Parse a wire relation type; unknown values yield `None`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "oneToOne" => Some(Self::OneToOne),
            "manyToOne" => Some(Self::ManyToOne),
            "oneToMany" => Some(Self::OneToMany),
            "manyToMany" => Some(Self::ManyToMany),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "oneToOne",
            Self::ManyToOne => "manyToOne",
            Self::OneToMany => "oneToMany",
            Self::ManyToMany => "manyToMany",
        }
    }

    /// Whether this side of the relation holds a collection of references.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

/// A schema-level field definition on a collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAttribute")]
pub struct Attribute {
    pub key: String,
    pub kind: AttributeType,
    pub required: bool,
    pub array: bool,
    pub relation_type: Option<RelationType>,
    pub related_collection_id: Option<String>,
}

impl Attribute {
    pub fn new(key: impl Into<String>, kind: AttributeType) -> Self {
        Self {
            key: key.into(),
            kind,
            required: false,
            array: false,
            relation_type: None,
            related_collection_id: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Create a relationship attribute pointing at another collection.
    pub fn relationship(
        key: impl Into<String>,
        relation_type: RelationType,
        related_collection_id: impl Into<String>,
    ) -> Self {
        Self {
            relation_type: Some(relation_type),
            related_collection_id: Some(related_collection_id.into()),
            ..Self::new(key, AttributeType::Relationship)
        }
    }
}

/// Attribute as it appears in an attribute listing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttribute {
    key: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    array: bool,
    #[serde(default)]
    relation_type: Option<String>,
    #[serde(default, alias = "relatedCollectionId")]
    related_collection: Option<String>,
}

impl From<RawAttribute> for Attribute {
    fn from(raw: RawAttribute) -> Self {
        Self {
            kind: AttributeType::from_wire(&raw.ty, raw.format.as_deref()),
            key: raw.key,
            required: raw.required,
            array: raw.array,
            relation_type: raw.relation_type.as_deref().and_then(RelationType::from_wire),
            related_collection_id: raw.related_collection,
        }
    }
}
