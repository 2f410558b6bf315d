use std::collections::HashSet;

use typewrite_codegen::{
    CodeFragment, CommentStyle, DatabaseEntry, FieldDecl, LanguageCodegen, ModuleDecl,
    NamingConvention, RecordDecl,
};

use crate::{Const, Field, Impl, RUST_NAMING, RustFile, RustTypeMapper, Struct, Use};

const MAP_TYPE: &str = "&[(&str, &[(&str, &str)])]";

/// Rust declaration emitter.
///
/// Produces one serde struct per collection with an `impl Collection`, and a
/// `DATABASE_MAP` constant nesting database id -> collection id -> type name.
pub struct Generator {
    naming: NamingConvention,
    mapper: RustTypeMapper,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn default_output(&self) -> &'static str {
        "src/database_map.rs"
    }

    fn render(&self, module: &ModuleDecl) -> String {
        let mut file = RustFile::new()
            .header("Generated by typewrite from the Appwrite schema. Do not edit.")
            .inner_attr("allow(non_camel_case_types)");

        if !module.records.is_empty() {
            file = file
                .use_stmt(Use::new("serde").symbols(["Deserialize", "Serialize"]))
                .use_stmt(Use::new("typewrite_client").symbol("Collection"));
        }
        file = file.use_stmt(
            Use::new("typewrite_client")
                .symbols(["PermissionOptions", "RoleString"])
                .public(),
        );

        for record in &module.records {
            file = file
                .add(self.record_struct(record))
                .add(self.collection_impl(record));
        }

        file.add(database_map(&module.map)).render()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            naming: RUST_NAMING,
            mapper: RustTypeMapper,
        }
    }

    fn record_struct(&self, record: &RecordDecl) -> Struct {
        let mut used = HashSet::new();
        record.fields.iter().fold(
            Struct::new(&record.name)
                .doc(format!(
                    "Collection `{}` in database `{}`.",
                    record.collection_id, record.database_id
                ))
                .derive("Debug")
                .derive("Clone")
                .derive("PartialEq")
                .derive("Serialize")
                .derive("Deserialize"),
            |s, field| s.field(self.field(field, &mut used)),
        )
    }

    /// Field for one attribute. `used` holds the field names already taken
    /// in the record; a clash gets the first free `_<n>` suffix.
    fn field(&self, field: &FieldDecl, used: &mut HashSet<String>) -> Field {
        let mut name = self.naming.field_name(&field.key);
        if used.contains(name.trim_start_matches("r#")) {
            let base = name.trim_start_matches("r#").to_string();
            let mut n = 2;
            while used.contains(&format!("{}_{}", base, n)) {
                n += 1;
            }
            name = format!("{}_{}", base, n);
        }
        let plain = name.trim_start_matches("r#").to_string();

        let mut serde = Vec::new();
        if plain != field.key {
            serde.push(format!("rename = {}", rust_str(&field.key)));
        }
        if field.optional {
            serde.push("default".to_string());
            serde.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        used.insert(plain);

        let decl = Field::new(&name, self.mapper.map_field(field));
        if serde.is_empty() {
            decl
        } else {
            decl.attr(format!("serde({})", serde.join(", ")))
        }
    }

    fn collection_impl(&self, record: &RecordDecl) -> Impl {
        Impl::new(&record.name)
            .for_trait("Collection")
            .constant(Const::new(
                "DATABASE_ID",
                "&'static str",
                rust_str(&record.database_id),
            ))
            .constant(Const::new(
                "COLLECTION_ID",
                "&'static str",
                rust_str(&record.collection_id),
            ))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn database_map(map: &[DatabaseEntry]) -> CodeFragment {
    let doc = CodeFragment::comment(
        CommentStyle::RustDoc,
        "Database id -> collection id -> declared type name.",
    );
    let header = format!("pub const DATABASE_MAP: {} = &[", MAP_TYPE);

    if map.is_empty() {
        return CodeFragment::Sequence(vec![doc, CodeFragment::Line(format!("{}];", header))]);
    }

    let databases = map
        .iter()
        .map(|database| {
            let id = rust_str(&database.database_id);
            if database.collections.is_empty() {
                return CodeFragment::Line(format!("({}, &[]),", id));
            }
            CodeFragment::block(
                format!("({}, &[", id),
                database
                    .collections
                    .iter()
                    .map(|entry| {
                        CodeFragment::Line(format!(
                            "({}, {}),",
                            rust_str(&entry.collection_id),
                            rust_str(&entry.type_name)
                        ))
                    })
                    .collect(),
                "]),",
            )
        })
        .collect();

    CodeFragment::Sequence(vec![doc, CodeFragment::block(header, databases, "];")])
}

/// Quote a string as a Rust literal.
fn rust_str(s: &str) -> String {
    format!("{:?}", s)
}

#[cfg(test)]
mod tests {
    use typewrite_codegen::{CollectionEntry, FieldType, ScalarType};

    use super::*;

    #[test]
    fn test_field_rename_and_optional() {
        let generator = Generator::new();
        let field = generator.field(
            &FieldDecl {
                key: "expenseAttachments".to_string(),
                ty: FieldType::Scalar(ScalarType::Dynamic),
                optional: true,
            },
            &mut HashSet::new(),
        );
        assert_eq!(field.name, "expense_attachments");
        assert_eq!(field.ty, "Option<serde_json::Value>");
        assert_eq!(
            field.attrs,
            vec![
                "serde(rename = \"expenseAttachments\", default, skip_serializing_if = \"Option::is_none\")"
            ]
        );
    }

    #[test]
    fn test_raw_identifier_needs_no_rename() {
        let generator = Generator::new();
        let field = generator.field(
            &FieldDecl {
                key: "type".to_string(),
                ty: FieldType::Scalar(ScalarType::String),
                optional: false,
            },
            &mut HashSet::new(),
        );
        assert_eq!(field.name, "r#type");
        assert!(field.attrs.is_empty());
    }

    #[test]
    fn test_clashing_field_names_get_suffixes() {
        let generator = Generator::new();
        let record = RecordDecl {
            name: "Departments".to_string(),
            database_id: "app".to_string(),
            collection_id: "departments".to_string(),
            fields: ["Name", "name", "userId", "user_id", "user_id_2"]
                .into_iter()
                .map(|key| FieldDecl {
                    key: key.to_string(),
                    ty: FieldType::Scalar(ScalarType::String),
                    optional: false,
                })
                .collect(),
        };

        insta::assert_snapshot!(generator.record_struct(&record).build(), @r#"
        /// Collection `departments` in database `app`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct Departments {
            #[serde(rename = "Name")]
            pub name: String,
            #[serde(rename = "name")]
            pub name_2: String,
            #[serde(rename = "userId")]
            pub user_id: String,
            #[serde(rename = "user_id")]
            pub user_id_2: String,
            #[serde(rename = "user_id_2")]
            pub user_id_2_2: String,
        }
        "#);
    }

    #[test]
    fn test_clash_with_raw_identifier_drops_escape() {
        let generator = Generator::new();
        let mut used = HashSet::new();
        let decl = |key: &str| FieldDecl {
            key: key.to_string(),
            ty: FieldType::Scalar(ScalarType::String),
            optional: false,
        };

        assert_eq!(generator.field(&decl("type"), &mut used).name, "r#type");
        let second = generator.field(&decl("Type"), &mut used);
        assert_eq!(second.name, "type_2");
        assert_eq!(second.attrs, vec!["serde(rename = \"Type\")"]);
    }

    #[test]
    fn test_empty_database_renders_inline() {
        let mut builder = typewrite_codegen::CodeBuilder::rust();
        builder.emit(&database_map(&[
            DatabaseEntry {
                database_id: "app".to_string(),
                collections: vec![CollectionEntry {
                    collection_id: "posts".to_string(),
                    type_name: "Posts".to_string(),
                }],
            },
            DatabaseEntry {
                database_id: "empty".to_string(),
                collections: Vec::new(),
            },
        ]));
        insta::assert_snapshot!(builder.build(), @r#"
        /// Database id -> collection id -> declared type name.
        pub const DATABASE_MAP: &[(&str, &[(&str, &str)])] = &[
            ("app", &[
                ("posts", "Posts"),
            ]),
            ("empty", &[]),
        ];
        "#);
    }
}
