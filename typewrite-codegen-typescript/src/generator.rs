use typewrite_codegen::{
    CodeFragment, DatabaseEntry, FieldDecl, LanguageCodegen, ModuleDecl, NamingConvention,
    RecordDecl, TypeMapper,
};

use crate::{
    CodeFile, Import, Interface, InterfaceField, TS_NAMING, TypeAlias, TypeScriptTypeMapper,
    ast::ts_str,
};

const DOCUMENT_BASE: &str = "Models.Document";

const ROLE_STRING_MEMBERS: &[&str] = &[
    "'any'",
    "'guests'",
    "'users'",
    "`user:${string}`",
    "`team:${string}:${string}`",
    "`label:${string}`",
];

const PERMISSION_ACTIONS: &[&str] = &["read", "write", "delete", "update"];

/// TypeScript declaration emitter.
pub struct Generator {
    naming: NamingConvention,
    mapper: TypeScriptTypeMapper,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn default_output(&self) -> &'static str {
        "src/types.ts"
    }

    fn render(&self, module: &ModuleDecl) -> String {
        let mut file = CodeFile::new()
            .header("Generated by typewrite from the Appwrite schema. Do not edit.")
            .import(Import::new("node-appwrite").named("Models"))
            .add(TypeAlias::union("RoleString", ROLE_STRING_MEMBERS.iter().copied()))
            .add(permission_options())
            .add(Interface::new("Document").extends(DOCUMENT_BASE));

        for record in &module.records {
            file = file.add(self.interface(record));
        }

        file.add(database_map(&module.map)).render()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            naming: TS_NAMING,
            mapper: TypeScriptTypeMapper,
        }
    }

    fn interface(&self, record: &RecordDecl) -> Interface {
        record.fields.iter().fold(
            Interface::new(&record.name)
                .doc(format!(
                    "Collection `{}` in database `{}`.",
                    record.collection_id, record.database_id
                ))
                .extends(DOCUMENT_BASE),
            |interface, field| interface.field(self.field(field)),
        )
    }

    fn field(&self, field: &FieldDecl) -> InterfaceField {
        let decl = InterfaceField::new(
            self.naming.field_name(&field.key),
            self.mapper.map_field_type(&field.ty),
        );
        if field.optional { decl.optional() } else { decl }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn permission_options() -> TypeAlias {
    TypeAlias::object(
        "PermissionOptions",
        PERMISSION_ACTIONS
            .iter()
            .map(|action| CodeFragment::Line(format!("{}?: RoleString[];", action)))
            .collect(),
    )
}

fn database_map(map: &[DatabaseEntry]) -> TypeAlias {
    let databases = map
        .iter()
        .map(|database| {
            let id = ts_str(&database.database_id);
            if database.collections.is_empty() {
                return CodeFragment::Line(format!("{}: {{}},", id));
            }
            CodeFragment::block(
                format!("{}: {{", id),
                database
                    .collections
                    .iter()
                    .map(|entry| {
                        CodeFragment::Line(format!(
                            "{}: {};",
                            ts_str(&entry.collection_id),
                            entry.type_name
                        ))
                    })
                    .collect(),
                "},",
            )
        })
        .collect();

    TypeAlias::object("DatabaseMap", databases)
}

#[cfg(test)]
mod tests {
    use typewrite_codegen::{CollectionEntry, FieldType, ScalarType};

    use super::*;

    #[test]
    fn test_optional_field() {
        let field = Generator::new().field(&FieldDecl {
            key: "nickname".to_string(),
            ty: FieldType::Scalar(ScalarType::String),
            optional: true,
        });
        assert_eq!(field.name, "nickname");
        assert_eq!(field.ty, "string");
        assert!(field.optional);
    }

    #[test]
    fn test_database_map() {
        let map = database_map(&[
            DatabaseEntry {
                database_id: "24so".to_string(),
                collections: vec![CollectionEntry {
                    collection_id: "auth_tokens".to_string(),
                    type_name: "Auth_Tokens".to_string(),
                }],
            },
            DatabaseEntry {
                database_id: "empty".to_string(),
                collections: Vec::new(),
            },
        ]);
        insta::assert_snapshot!(map.build(), @r"
        export type DatabaseMap = {
          '24so': {
            'auth_tokens': Auth_Tokens;
          },
          'empty': {},
        };
        ");
    }

    #[test]
    fn test_permission_options() {
        insta::assert_snapshot!(permission_options().build(), @r"
        export type PermissionOptions = {
          read?: RoleString[];
          write?: RoleString[];
          delete?: RoleString[];
          update?: RoleString[];
        };
        ");
    }
}
