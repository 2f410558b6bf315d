//! Plan phase - assigns each collection its declared type name.

use eyre::Result;
use indexmap::IndexMap;
use typewrite_core::{capitalize_first, collection_type_name, is_identifier, sanitize_type_name};
use typewrite_schema::{CollectionSchema, SchemaSnapshot};

use crate::{
    error::GenerateError,
    pipeline::{CompilationContext, Diagnostic, NamePlan, Phase},
};

/// Names the generated files declare or import; collections never take them.
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "Box",
    "Collection",
    "DatabaseMap",
    "Date",
    "Deserialize",
    "Document",
    "Models",
    "Option",
    "PermissionOptions",
    "RoleString",
    "Self",
    "Serialize",
    "String",
    "Vec",
];

/// Phase that plans type names for the whole snapshot before anything renders.
///
/// A collection whose name is already taken is declared as
/// `<DatabaseId>_<Name>` with a warning. If that is taken too the phase fails
/// with [`GenerateError::NameCollision`].
pub struct PlanNamesPhase;

impl Phase for PlanNamesPhase {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn description(&self) -> &'static str {
        "Assign one declared type name per collection"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let plan = plan_names(self.name(), &ctx.snapshot, &mut ctx.diagnostics)?;
        ctx.names = Some(plan);
        Ok(())
    }
}

/// Declared type name for a display name, falling back to the id when the
/// name sanitizes to nothing.
pub(crate) fn declared_type_name(name: &str, id: &str) -> String {
    let mut declared = collection_type_name(name);
    if declared.is_empty() {
        declared = collection_type_name(id);
    }
    if !is_identifier(&declared) {
        declared.insert(0, '_');
    }
    declared
}

fn default_name(collection: &CollectionSchema) -> String {
    declared_type_name(&collection.name, &collection.id)
}

fn owner_label(owner: Option<&str>) -> String {
    match owner {
        Some(location) => format!("'{}'", location),
        None => "a generated declaration".to_string(),
    }
}

fn plan_names(
    phase: &str,
    snapshot: &SchemaSnapshot,
    diagnostics: &mut Vec<Diagnostic>,
) -> std::result::Result<NamePlan, GenerateError> {
    let mut plan = NamePlan::default();
    // Declared name -> owning collection; `None` for the reserved names.
    let mut taken: IndexMap<String, Option<String>> = RESERVED_TYPE_NAMES
        .iter()
        .map(|name| (name.to_string(), None))
        .collect();

    for database in &snapshot.databases {
        for collection in &database.collections {
            let location = format!("{}.{}", database.id, collection.id);
            let base = default_name(collection);

            let name = match taken.get(&base) {
                None => base,
                Some(owner) => {
                    let prefixed = format!(
                        "{}_{}",
                        capitalize_first(&sanitize_type_name(&database.id)),
                        base
                    );
                    if let Some(first) = taken.get(&prefixed) {
                        let err = GenerateError::NameCollision {
                            first: first
                                .clone()
                                .unwrap_or_else(|| "a generated declaration".to_string()),
                            name: prefixed,
                            second: location.clone(),
                        };
                        diagnostics.push(Diagnostic::error(phase, err.to_string()).at(location));
                        return Err(err);
                    }
                    diagnostics.push(
                        Diagnostic::warning(
                            phase,
                            format!(
                                "type name '{}' is already used by {}; declared as '{}'",
                                base,
                                owner_label(owner.as_deref()),
                                prefixed
                            ),
                        )
                        .at(&location),
                    );
                    prefixed
                }
            };

            taken.insert(name.clone(), Some(location));
            plan.insert(&database.id, &collection.id, name);
        }
    }

    Ok(plan)
}
