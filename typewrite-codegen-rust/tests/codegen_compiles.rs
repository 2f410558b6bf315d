//! Integration tests that verify generated declarations compile.
//!
//! Each test renders a schema, places the output in a scratch crate that
//! depends on serde, serde_json, chrono and typewrite-client, and runs
//! `cargo check` on it.

use std::{path::Path, process::Command};

use tempfile::TempDir;
use typewrite_codegen::pipeline::Pipeline;
use typewrite_codegen_rust::{Generator, LanguageCodegen};
use typewrite_schema::{
    Attribute, AttributeType, CollectionSchema, DatabaseSchema, RelationType, SchemaSnapshot,
};

const LIB_RS: &str = r#"mod database_map;

pub use database_map::*;

pub fn ids<T: typewrite_client::Collection>() -> (&'static str, &'static str) {
    (T::DATABASE_ID, T::COLLECTION_ID)
}

pub fn map() -> &'static [(&'static str, &'static [(&'static str, &'static str)])] {
    DATABASE_MAP
}
"#;

fn cargo_toml() -> String {
    let client = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../typewrite-client")
        .canonicalize()
        .expect("Failed to locate typewrite-client");
    format!(
        r#"[package]
name = "generated-declarations"
version = "0.0.0"
edition = "2024"
publish = false

[workspace]

[dependencies]
chrono = {{ version = "0.4", features = ["serde"] }}
serde = {{ version = "1", features = ["derive"] }}
serde_json = "1"
typewrite-client = {{ path = "{}" }}
"#,
        client.display().to_string().replace('\\', "/")
    )
}

/// Render a snapshot and verify the declarations compile with `cargo check`
fn assert_generated_code_compiles(snapshot: SchemaSnapshot) {
    let mut ctx = Pipeline::new().run(snapshot).expect("Failed to plan");
    let module = ctx.take_module().expect("Failed to lower");
    let code = Generator::new().render(&module);

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let crate_dir = temp_dir.path();
    std::fs::create_dir_all(crate_dir.join("src")).expect("Failed to create src");
    std::fs::write(crate_dir.join("Cargo.toml"), cargo_toml()).expect("Failed to write manifest");
    std::fs::write(crate_dir.join("src/lib.rs"), LIB_RS).expect("Failed to write lib.rs");
    std::fs::write(crate_dir.join("src/database_map.rs"), &code)
        .expect("Failed to write declarations");

    // One target dir for every case, so dependencies build once.
    let target_dir = std::env::temp_dir().join("typewrite-codegen-compiles");
    let output = Command::new("cargo")
        .args(["check", "--message-format=short"])
        .env("CARGO_TARGET_DIR", &target_dir)
        .current_dir(crate_dir)
        .output()
        .expect("Failed to run cargo check");

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        eprintln!("\n=== src/database_map.rs ===");
        for line in code.lines() {
            eprintln!("  | {}", line);
        }

        panic!(
            "Generated code failed to compile!\n\nstdout:\n{}\n\nstderr:\n{}",
            stdout, stderr
        );
    }
}

#[test]
fn test_blog_schema_compiles() {
    assert_generated_code_compiles(
        SchemaSnapshot::new().database(
            DatabaseSchema::new("blog", "Blog")
                .collection(
                    CollectionSchema::new("users", "users")
                        .attribute(Attribute::new("age", AttributeType::Integer).required())
                        .attribute(Attribute::new("nickname", AttributeType::String))
                        .attribute(Attribute::new("score", AttributeType::Float))
                        .attribute(Attribute::new("active", AttributeType::Boolean).required())
                        .attribute(Attribute::new("joined", AttributeType::Datetime).required())
                        .attribute(Attribute::new("email", AttributeType::Email))
                        .attribute(Attribute::new("homepage", AttributeType::Url))
                        .attribute(Attribute::new("lastIp", AttributeType::Ip))
                        .attribute(Attribute::new("role", AttributeType::Enum))
                        .attribute(Attribute::new(
                            "area",
                            AttributeType::Other("polygon".to_string()),
                        ))
                        .attribute(Attribute::relationship(
                            "tags",
                            RelationType::ManyToMany,
                            "tags",
                        ))
                        .attribute(Attribute::relationship(
                            "profile",
                            RelationType::OneToOne,
                            "profiles",
                        ))
                        .attribute(Attribute::relationship(
                            "manager",
                            RelationType::ManyToOne,
                            "users",
                        )),
                )
                .collection(
                    CollectionSchema::new("tags", "tags")
                        .attribute(Attribute::new("labels", AttributeType::String).array())
                        .attribute(Attribute::relationship(
                            "users",
                            RelationType::OneToMany,
                            "users",
                        )),
                )
                .collection(CollectionSchema::new("profiles", "profiles")),
        ),
    );
}

#[test]
fn test_awkward_names_compile() {
    assert_generated_code_compiles(
        SchemaSnapshot::new()
            .database(
                DatabaseSchema::new("app", "App")
                    .collection(
                        CollectionSchema::new("departments", "Departments")
                            .attribute(Attribute::new("Name", AttributeType::String).required())
                            .attribute(Attribute::new("name", AttributeType::String))
                            .attribute(Attribute::new("userId", AttributeType::String))
                            .attribute(Attribute::new("user_id", AttributeType::String))
                            .attribute(Attribute::new("type", AttributeType::String))
                            .attribute(Attribute::new("Type", AttributeType::String))
                            .attribute(Attribute::new("self", AttributeType::Boolean))
                            .attribute(Attribute::new("2fa", AttributeType::Boolean))
                            .attribute(Attribute::new("zip-code", AttributeType::String)),
                    )
                    .collection(CollectionSchema::new("users", "Users"))
                    .collection(CollectionSchema::new("docs", "Document"))
                    .collection(CollectionSchema::new("dates", "date"))
                    .collection(CollectionSchema::new("me", "self"))
                    .collection(CollectionSchema::new("orders", "2024 orders")),
            )
            .database(
                DatabaseSchema::new("legacy-db", "Legacy")
                    .collection(CollectionSchema::new("users", "Users")),
            )
            .database(DatabaseSchema::new("empty", "Empty")),
    );
}

#[test]
fn test_empty_schema_compiles() {
    assert_generated_code_compiles(SchemaSnapshot::new());
}
