//! CLI command implementations

pub mod layout;
pub mod plan;

pub use layout::LayoutArgs;
pub use plan::PlanArgs;
