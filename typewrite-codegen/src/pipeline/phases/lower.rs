//! Lower phase - turns the snapshot into language-agnostic declarations.

use eyre::{Result, eyre};
use typewrite_schema::{Attribute, AttributeType, SchemaSnapshot};

use super::plan::declared_type_name;
use crate::{
    pipeline::{CompilationContext, Diagnostic, NamePlan, Phase},
    types::{
        CollectionEntry, DatabaseEntry, FieldDecl, FieldType, ModuleDecl, RecordDecl, ScalarType,
        scalar_type,
    },
};

/// Phase that lowers every collection into a [`RecordDecl`] and builds the
/// database map. Requires the plan phase to have run.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Lower collections into record declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let names = ctx
            .names
            .as_ref()
            .ok_or_else(|| eyre!("type names not planned; did the plan phase run?"))?;
        let module = lower(self.name(), &ctx.snapshot, names, &mut ctx.diagnostics);
        ctx.module = Some(module);
        Ok(())
    }
}

fn lower(
    phase: &str,
    snapshot: &SchemaSnapshot,
    names: &NamePlan,
    diagnostics: &mut Vec<Diagnostic>,
) -> ModuleDecl {
    let mut module = ModuleDecl::default();

    for database in &snapshot.databases {
        let mut entry = DatabaseEntry {
            database_id: database.id.clone(),
            collections: Vec::with_capacity(database.collections.len()),
        };

        for collection in &database.collections {
            let name = names
                .get(&database.id, &collection.id)
                .map(str::to_string)
                .unwrap_or_else(|| declared_type_name(&collection.name, &collection.id));

            let fields = collection
                .attributes
                .iter()
                .map(|attribute| {
                    let location =
                        format!("{}.{}.{}", database.id, collection.id, attribute.key);
                    let ty =
                        field_type(phase, &database.id, attribute, names, &location, diagnostics);
                    FieldDecl {
                        key: attribute.key.clone(),
                        ty,
                        optional: !attribute.required,
                    }
                })
                .collect();

            entry.collections.push(CollectionEntry {
                collection_id: collection.id.clone(),
                type_name: name.clone(),
            });
            module.records.push(RecordDecl {
                name,
                database_id: database.id.clone(),
                collection_id: collection.id.clone(),
                fields,
            });
        }

        module.map.push(entry);
    }

    module
}

fn field_type(
    phase: &str,
    database_id: &str,
    attribute: &Attribute,
    names: &NamePlan,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> FieldType {
    let Some(scalar) = scalar_type(&attribute.kind) else {
        return relationship_type(phase, database_id, attribute, names, location, diagnostics);
    };

    if let AttributeType::Other(kind) = &attribute.kind {
        diagnostics.push(
            Diagnostic::info(
                phase,
                format!("unknown attribute type '{}' mapped to a dynamic value", kind),
            )
            .at(location),
        );
    }

    let ty = FieldType::Scalar(scalar);
    if attribute.array {
        FieldType::many(ty)
    } else {
        ty
    }
}

fn relationship_type(
    phase: &str,
    database_id: &str,
    attribute: &Attribute,
    names: &NamePlan,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> FieldType {
    let Some(related) = attribute.related_collection_id.as_deref() else {
        diagnostics.push(
            Diagnostic::warning(
                phase,
                "relationship has no related collection; mapped to a dynamic value",
            )
            .at(location),
        );
        return FieldType::Scalar(ScalarType::Dynamic);
    };

    let name = match names.get(database_id, related) {
        Some(name) => name.to_string(),
        None => {
            let fallback = declared_type_name(related, related);
            diagnostics.push(
                Diagnostic::warning(
                    phase,
                    format!(
                        "related collection '{}' is not in database '{}'; referenced as '{}'",
                        related, database_id, fallback
                    ),
                )
                .at(location),
            );
            fallback
        }
    };

    let ty = FieldType::Reference(name);
    if attribute.relation_type.is_some_and(|r| r.is_many()) {
        FieldType::many(ty)
    } else {
        ty
    }
}
