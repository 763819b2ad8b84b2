pub mod plan_request;

pub use plan_request::{PlanRequestRow, PlanStatus, StoredPlanRequest};
