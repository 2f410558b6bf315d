//! Built-in pipeline phases.

mod lower;
mod plan;

pub use lower::LowerPhase;
pub use plan::{PlanNamesPhase, RESERVED_TYPE_NAMES};
