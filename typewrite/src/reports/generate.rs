//! Generate command report data structures.

use typewrite_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target language identifier.
    pub language: &'static str,
    pub stats: SchemaStats,
    /// Warning diagnostics from the pipeline, already formatted.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Size of the introspected schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaStats {
    pub databases: usize,
    pub collections: usize,
    pub attributes: usize,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// The declarations file was written (or already up to date).
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewFile),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub path: String,
    /// False when the file already had identical content.
    pub changed: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_stats(&self, out: &mut dyn Output) {
        out.section("Schema");
        out.key_value_indented("databases", &self.stats.databases.to_string());
        out.key_value_indented("collections", &self.stats.collections.to_string());
        out.key_value_indented("attributes", &self.stats.attributes.to_string());
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_stats(out);
        out.newline();

        let label = if written.changed {
            "Generated"
        } else {
            "Up to date"
        };
        out.key_value(label, &format!("{} ({})", written.path, self.language));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewFile) {
        out.divider(&preview.path);
        out.preformatted(&preview.content);

        out.divider("Summary");
        self.render_stats(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records rendered lines for assertions.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Output for Recorder {
        fn section(&mut self, name: &str) {
            self.0.push(format!("{}:", name));
        }

        fn key_value_indented(&mut self, key: &str, value: &str) {
            self.0.push(format!("  {}: {}", key, value));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.0.push(format!("{}: {}", key, value));
        }

        fn warning(&mut self, msg: &str) {
            self.0.push(format!("[stderr] {}", msg));
        }

        fn divider(&mut self, label: &str) {
            self.0.push(format!("-- {} --", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }

        fn newline(&mut self) {
            self.0.push(String::new());
        }
    }

    fn stats() -> SchemaStats {
        SchemaStats {
            databases: 2,
            collections: 4,
            attributes: 12,
        }
    }

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            language: "rust",
            stats: stats(),
            warnings: vec!["warning: renamed (at app.users)".to_string()],
            result: GenerationResult::Written(WrittenResult {
                path: "src/database_map.rs".to_string(),
                changed: true,
            }),
        };

        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            vec![
                "[stderr] warning: renamed (at app.users)",
                "Schema:",
                "  databases: 2",
                "  collections: 4",
                "  attributes: 12",
                "",
                "Generated: src/database_map.rs (rust)",
            ]
        );
    }

    #[test]
    fn test_unchanged_report() {
        let report = GenerateReport {
            language: "typescript",
            stats: stats(),
            warnings: Vec::new(),
            result: GenerationResult::Written(WrittenResult {
                path: "src/types.ts".to_string(),
                changed: false,
            }),
        };

        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(
            out.0.last().map(String::as_str),
            Some("Up to date: src/types.ts (typescript)")
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            language: "typescript",
            stats: stats(),
            warnings: Vec::new(),
            result: GenerationResult::Preview(PreviewFile {
                path: "src/types.ts".to_string(),
                content: "export type DatabaseMap = {};\n".to_string(),
            }),
        };

        let mut out = Recorder::default();
        report.render(&mut out);
        assert_eq!(out.0[0], "-- src/types.ts --");
        assert_eq!(out.0[1], "export type DatabaseMap = {};\n");
        assert_eq!(out.0[2], "-- Summary --");
    }
}
