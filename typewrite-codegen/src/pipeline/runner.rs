use eyre::Result;
use typewrite_schema::SchemaSnapshot;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, PlanNamesPhase},
};

/// Runs the built-in phases (plan, lower) followed by any added phases.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn run(&self, snapshot: SchemaSnapshot) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(snapshot);

        PlanNamesPhase.run(&mut ctx)?;
        LowerPhase.run(&mut ctx)?;
        for phase in &self.phases {
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
