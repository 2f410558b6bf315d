use eyre::Result;

use super::CompilationContext;

/// A phase in the generation pipeline.
///
/// Phases run in order and read or extend the compilation context.
/// Non-fatal issues are recorded as diagnostics; a returned error stops the
/// pipeline.
pub trait Phase {
    /// The name of this phase, used in diagnostics.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
