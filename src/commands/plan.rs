//! Commands for building and retrieving training plans

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::AppState;
use crate::engine::{build_plan, Plan, PlanRequest};
use crate::models::{PlanStatus, StoredPlanRequest};
use crate::store::{create_plan_request, generate_stored_plan, list_plan_requests, load_plan_request};

/// Listing row without the cached plan body
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub plan_id: String,
    pub email: Option<String>,
    pub status: PlanStatus,
    pub number_of_weeks: u32,
    pub sessions_per_week: u8,
    pub reference_distance: String,
    pub reference_time: String,
}

impl From<StoredPlanRequest> for PlanSummary {
    fn from(stored: StoredPlanRequest) -> Self {
        Self {
            plan_id: stored.plan_id,
            email: stored.email,
            status: stored.status,
            number_of_weeks: stored.request.number_of_weeks,
            sessions_per_week: stored.request.sessions_per_week,
            reference_distance: stored.request.reference_distance,
            reference_time: stored.request.reference_time,
        }
    }
}

/// Build a plan without storing anything
pub fn preview_plan(request: PlanRequest) -> Result<Plan, String> {
    build_plan(&request).map_err(|e| format!("Failed to build plan: {}", e))
}

/// Store a request and return its plan id
pub async fn create_plan(
    state: Arc<AppState>,
    request: PlanRequest,
    email: Option<String>,
) -> Result<String, String> {
    create_plan_request(&state.db, &request, email.as_deref())
        .await
        .map_err(|e| format!("Failed to create plan: {}", e))
}

/// Fetch the plan for a stored request, building it on first access
pub async fn get_plan(state: Arc<AppState>, plan_id: String) -> Result<Plan, String> {
    let stored = load_plan_request(&state.db, &plan_id)
        .await
        .map_err(|e| format!("Failed to load plan: {}", e))?;

    if let (PlanStatus::Generated, Some(plan)) = (stored.status, stored.plan) {
        return Ok(plan);
    }
    if stored.status == PlanStatus::Generated {
        warn!("Plan {} marked generated without a cached plan, rebuilding", plan_id);
    }

    let plan = generate_stored_plan(&state.db, &plan_id)
        .await
        .map_err(|e| format!("Failed to generate plan: {}", e))?;
    info!("Generated plan {}", plan_id);
    Ok(plan)
}

/// List stored plan requests, newest first
pub async fn list_plans(state: Arc<AppState>) -> Result<Vec<PlanSummary>, String> {
    let stored = list_plan_requests(&state.db)
        .await
        .map_err(|e| format!("Failed to list plans: {}", e))?;
    Ok(stored.into_iter().map(PlanSummary::from).collect())
}
