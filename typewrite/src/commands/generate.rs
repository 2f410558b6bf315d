use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use typewrite_client::{AppwriteClient, Config};

use super::UnwrapOrExit;
use crate::{
    language::{Language, LanguageSupport},
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target language for the declarations
    #[arg(short, long, value_enum, default_value_t = Language::Rust)]
    pub language: Language,

    /// Output file (defaults to src/database_map.rs or src/types.ts)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the declarations instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        // Checked before any network call.
        let config = Config::from_env().unwrap_or_exit();
        let client = AppwriteClient::new(&config).wrap_err("failed to create Appwrite client")?;

        let lang = LanguageSupport::get(self.language);
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(lang.default_output()));

        let report = ops::generate(
            &client,
            &lang,
            GenerateOptions {
                output: &output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
