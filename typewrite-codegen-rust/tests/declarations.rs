//! Rendered output of the Rust emitter for whole schemas.

use typewrite_codegen::pipeline::Pipeline;
use typewrite_codegen_rust::{Generator, LanguageCodegen};
use typewrite_schema::{
    Attribute, AttributeType, CollectionSchema, DatabaseSchema, RelationType, SchemaSnapshot,
};

fn render(snapshot: SchemaSnapshot) -> String {
    let mut ctx = Pipeline::new().run(snapshot).unwrap();
    let module = ctx.take_module().unwrap();
    Generator::new().render(&module)
}

#[test]
fn test_blog_schema() {
    let code = render(
        SchemaSnapshot::new().database(
            DatabaseSchema::new("blog", "Blog")
                .collection(
                    CollectionSchema::new("users", "users")
                        .attribute(Attribute::new("age", AttributeType::Integer).required())
                        .attribute(Attribute::new("nickname", AttributeType::String))
                        .attribute(Attribute::relationship(
                            "tags",
                            RelationType::ManyToMany,
                            "tags",
                        )),
                )
                .collection(
                    CollectionSchema::new("tags", "tags")
                        .attribute(Attribute::new("label", AttributeType::String).required()),
                ),
        ),
    );

    insta::assert_snapshot!(code, @r##"
    // Generated by typewrite from the Appwrite schema. Do not edit.

    #![allow(non_camel_case_types)]

    use serde::{Deserialize, Serialize};
    use typewrite_client::Collection;

    pub use typewrite_client::{PermissionOptions, RoleString};

    /// Collection `users` in database `blog`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Users {
        pub age: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub nickname: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub tags: Option<Vec<Tags>>,
    }

    impl Collection for Users {
        const DATABASE_ID: &'static str = "blog";
        const COLLECTION_ID: &'static str = "users";
    }

    /// Collection `tags` in database `blog`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Tags {
        pub label: String,
    }

    impl Collection for Tags {
        const DATABASE_ID: &'static str = "blog";
        const COLLECTION_ID: &'static str = "tags";
    }

    /// Database id -> collection id -> declared type name.
    pub const DATABASE_MAP: &[(&str, &[(&str, &str)])] = &[
        ("blog", &[
            ("users", "Users"),
            ("tags", "Tags"),
        ]),
    ];
    "##);
}

#[test]
fn test_empty_schema() {
    let code = render(SchemaSnapshot::new());

    insta::assert_snapshot!(code, @r##"
    // Generated by typewrite from the Appwrite schema. Do not edit.

    #![allow(non_camel_case_types)]

    pub use typewrite_client::{PermissionOptions, RoleString};

    /// Database id -> collection id -> declared type name.
    pub const DATABASE_MAP: &[(&str, &[(&str, &str)])] = &[];
    "##);
}

#[test]
fn test_field_names_are_rust_safe() {
    let code = render(SchemaSnapshot::new().database(
        DatabaseSchema::new("global", "Global").collection(
            CollectionSchema::new("departments", "Departments")
                .attribute(Attribute::new("Name", AttributeType::String).required())
                .attribute(Attribute::new("type", AttributeType::Enum).required())
                .attribute(Attribute::new("foundedAt", AttributeType::Datetime).required())
                .attribute(Attribute::new("socials", AttributeType::Url).array().required()),
        ),
    ));

    assert!(code.contains("    #[serde(rename = \"Name\")]\n    pub name: String,\n"));
    assert!(code.contains("    pub r#type: String,\n"));
    assert!(code.contains(
        "    #[serde(rename = \"foundedAt\")]\n    pub founded_at: chrono::DateTime<chrono::Utc>,\n"
    ));
    assert!(code.contains("    pub socials: Vec<String>,\n"));
}

#[test]
fn test_single_relationship_is_boxed() {
    let code = render(SchemaSnapshot::new().database(
        DatabaseSchema::new("app", "App")
            .collection(
                CollectionSchema::new("expenses", "Expenses").attribute(
                    Attribute::relationship("users", RelationType::ManyToOne, "users").required(),
                ),
            )
            .collection(CollectionSchema::new("users", "Users")),
    ));

    assert!(code.contains("    pub users: Box<Users>,\n"));
    assert!(code.contains("pub struct Users {}\n"));
}

#[test]
fn test_output_is_deterministic() {
    let snapshot = SchemaSnapshot::new()
        .database(
            DatabaseSchema::new("app", "App")
                .collection(CollectionSchema::new("posts", "posts"))
                .collection(CollectionSchema::new("news", "news")),
        )
        .database(DatabaseSchema::new("24so", "24SevenOffice"));

    assert_eq!(render(snapshot.clone()), render(snapshot));
}
