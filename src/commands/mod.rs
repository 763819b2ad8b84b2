pub mod plan;

pub use plan::{create_plan, get_plan, list_plans, preview_plan, PlanSummary};
