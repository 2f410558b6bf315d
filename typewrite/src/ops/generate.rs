//! Generate operation - declarations from a live schema.

use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::info;
use typewrite_client::DatabasesApi;
use typewrite_codegen::pipeline::{Pipeline, Severity};
use typewrite_core::{File, WriteResult};

use super::introspect;
use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, SchemaStats, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Declarations file to write.
    pub output: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Introspects the schema, plans and lowers declarations, renders them for
/// the target language, then writes the output in one atomic step. Nothing
/// is written when any step fails.
pub fn generate(
    api: &impl DatabasesApi,
    lang: &LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let snapshot = introspect(api).wrap_err("introspection failed")?;
    let stats = SchemaStats {
        databases: snapshot.databases.len(),
        collections: snapshot.collection_count(),
        attributes: snapshot.attribute_count(),
    };

    let mut ctx = Pipeline::new()
        .run(snapshot)
        .wrap_err("failed to plan declarations")?;

    let warnings: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.to_string())
        .collect();

    let module = ctx.take_module()?;
    let generator = lang.generator();
    let path = opts.output.display().to_string();

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview(&module, &path))
    } else {
        let file = File::new(opts.output, generator.render(&module));
        let written = file
            .write()
            .wrap_err_with(|| format!("failed to write '{}'", path))?;
        let changed = matches!(written, WriteResult::Written);
        info!(
            "{} {}",
            path,
            if changed { "written" } else { "unchanged" }
        );
        GenerationResult::Written(WrittenResult { path, changed })
    };

    Ok(GenerateReport {
        language: generator.language(),
        stats,
        warnings,
        result,
    })
}
