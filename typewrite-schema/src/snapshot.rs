//! Whole-schema snapshot assembled by an introspection walk.

use crate::Attribute;

/// Every database, collection and attribute of a project, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSnapshot {
    pub databases: Vec<DatabaseSchema>,
}

/// A database and its collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSchema {
    pub id: String,
    pub name: String,
    pub collections: Vec<CollectionSchema>,
}

/// A collection and its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    pub id: String,
    /// Display name, used to derive the declared type name.
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl SchemaSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(mut self, database: DatabaseSchema) -> Self {
        self.databases.push(database);
        self
    }

    /// Total number of collections across all databases.
    pub fn collection_count(&self) -> usize {
        self.databases.iter().map(|db| db.collections.len()).sum()
    }

    /// Total number of attributes across all collections.
    pub fn attribute_count(&self) -> usize {
        self.databases
            .iter()
            .flat_map(|db| &db.collections)
            .map(|col| col.attributes.len())
            .sum()
    }
}

impl DatabaseSchema {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            collections: Vec::new(),
        }
    }

    pub fn collection(mut self, collection: CollectionSchema) -> Self {
        self.collections.push(collection);
        self
    }

    /// Find a collection by id.
    pub fn find_collection(&self, id: &str) -> Option<&CollectionSchema> {
        self.collections.iter().find(|c| c.id == id)
    }
}

impl CollectionSchema {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttributeType, RelationType};

    fn sample() -> SchemaSnapshot {
        SchemaSnapshot::new()
            .database(
                DatabaseSchema::new("app", "App")
                    .collection(
                        CollectionSchema::new("posts", "Posts")
                            .attribute(Attribute::new("title", AttributeType::String).required())
                            .attribute(Attribute::relationship(
                                "tags",
                                RelationType::ManyToMany,
                                "tags",
                            )),
                    )
                    .collection(CollectionSchema::new("tags", "Tags")),
            )
            .database(DatabaseSchema::new("global", "Global"))
    }

    #[test]
    fn test_counts() {
        let snapshot = sample();
        assert_eq!(snapshot.databases.len(), 2);
        assert_eq!(snapshot.collection_count(), 2);
        assert_eq!(snapshot.attribute_count(), 2);
    }

    #[test]
    fn test_find_collection() {
        let snapshot = sample();
        let app = &snapshot.databases[0];
        assert_eq!(app.find_collection("tags").map(|c| c.name.as_str()), Some("Tags"));
        assert!(app.find_collection("missing").is_none());
    }
}
