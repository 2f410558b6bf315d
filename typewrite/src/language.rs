//! Unified language dispatch.

use clap::ValueEnum;
use typewrite_codegen::LanguageCodegen;
use typewrite_codegen_rust::Generator as RustGenerator;
use typewrite_codegen_typescript::Generator as TypeScriptGenerator;

/// Target language for generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Rust,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
}

/// Language-specific support for code generation.
pub struct LanguageSupport {
    generator: Box<dyn LanguageCodegen>,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        let generator: Box<dyn LanguageCodegen> = match language {
            Language::Rust => Box::new(RustGenerator::new()),
            Language::TypeScript => Box::new(TypeScriptGenerator::new()),
        };
        Self { generator }
    }

    pub fn generator(&self) -> &dyn LanguageCodegen {
        self.generator.as_ref()
    }

    /// Output path used when `--output` is not given.
    pub fn default_output(&self) -> &'static str {
        self.generator.default_output()
    }
}
