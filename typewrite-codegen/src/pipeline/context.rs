use eyre::{Result, eyre};
use indexmap::IndexMap;
use typewrite_schema::SchemaSnapshot;

use super::diagnostic::{Diagnostic, Severity};
use crate::types::ModuleDecl;

/// Planned type name per `(database id, collection id)`, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePlan {
    names: IndexMap<(String, String), String>,
}

impl NamePlan {
    pub fn insert(&mut self, database_id: &str, collection_id: &str, name: String) {
        self.names
            .insert((database_id.to_string(), collection_id.to_string()), name);
    }

    pub fn get(&self, database_id: &str, collection_id: &str) -> Option<&str> {
        self.names
            .get(&(database_id.to_string(), collection_id.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// State carried through the pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    pub snapshot: SchemaSnapshot,
    /// Populated by the plan phase.
    pub names: Option<NamePlan>,
    /// Populated by the lower phase.
    pub module: Option<ModuleDecl>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(snapshot: SchemaSnapshot) -> Self {
        Self {
            snapshot,
            names: None,
            module: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    pub fn take_module(&mut self) -> Result<ModuleDecl> {
        self.module
            .take()
            .ok_or_else(|| eyre!("declarations not lowered; did the lower phase run?"))
    }
}
