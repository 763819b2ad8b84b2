//! Plan request persistence
//!
//! Requests are stored under a public `plan_id` so a plan can be rebuilt or
//! fetched later (for example after an external payment confirms it). The
//! engine itself never touches the database; this module is its caller.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::{build_plan, Plan, PlanRequest};
use crate::error::StoreError;
use crate::models::{PlanRequestRow, PlanStatus, StoredPlanRequest};

const SELECT_PLAN_REQUEST: &str = r#"
    SELECT
        id, plan_id, email, start_monday, number_of_weeks, sessions_per_week,
        start_week_volume, weekly_increase, reference_distance, reference_time,
        race_distance, status, plan_json, generated_at, created_at
    FROM plan_requests
"#;

fn new_plan_id() -> String {
    format!("plan_{}", Uuid::new_v4().simple())
}

/// Store a plan request and return its plan id.
///
/// The request is built once first so invalid input never reaches the table.
pub async fn create_plan_request(
    pool: &SqlitePool,
    request: &PlanRequest,
    email: Option<&str>,
) -> Result<String, StoreError> {
    build_plan(request)?;

    let plan_id = new_plan_id();
    let race_distance = request.race_distance.map(|d| d.as_str());

    sqlx::query(
        r#"
        INSERT INTO plan_requests (
            plan_id, email, start_monday, number_of_weeks, sessions_per_week,
            start_week_volume, weekly_increase, reference_distance, reference_time,
            race_distance, status
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#,
    )
    .bind(&plan_id)
    .bind(email)
    .bind(request.start_monday)
    .bind(request.number_of_weeks as i64)
    .bind(request.sessions_per_week as i64)
    .bind(request.start_week_volume)
    .bind(request.weekly_increase)
    .bind(&request.reference_distance)
    .bind(&request.reference_time)
    .bind(race_distance)
    .bind(PlanStatus::Pending.to_string())
    .execute(pool)
    .await?;

    info!("Stored plan request {}", plan_id);
    Ok(plan_id)
}

/// Load a stored request by plan id
pub async fn load_plan_request(
    pool: &SqlitePool,
    plan_id: &str,
) -> Result<StoredPlanRequest, StoreError> {
    let row = sqlx::query_as::<_, PlanRequestRow>(&format!("{} WHERE plan_id = ?1", SELECT_PLAN_REQUEST))
        .bind(plan_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(plan_id.to_string()))?;

    row.try_into()
}

/// All stored requests, newest first
pub async fn list_plan_requests(pool: &SqlitePool) -> Result<Vec<StoredPlanRequest>, StoreError> {
    let rows = sqlx::query_as::<_, PlanRequestRow>(&format!(
        "{} ORDER BY created_at DESC, id DESC",
        SELECT_PLAN_REQUEST
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(StoredPlanRequest::try_from).collect()
}

/// Build the plan for a stored request, cache it and mark it generated.
///
/// Building is deterministic, so regenerating overwrites the cache with an
/// identical plan.
pub async fn generate_stored_plan(pool: &SqlitePool, plan_id: &str) -> Result<Plan, StoreError> {
    let stored = load_plan_request(pool, plan_id).await?;
    let plan = build_plan(&stored.request)?;
    let plan_json = serde_json::to_string(&plan)?;

    sqlx::query(
        r#"
        UPDATE plan_requests
        SET status = ?1,
            plan_json = ?2,
            generated_at = ?3
        WHERE plan_id = ?4
        "#,
    )
    .bind(PlanStatus::Generated.to_string())
    .bind(&plan_json)
    .bind(Utc::now())
    .bind(plan_id)
    .execute(pool)
    .await?;

    debug!(
        "Generated plan {}: {} weeks, {} km, race week starting {:?}",
        plan_id,
        plan.weeks.len(),
        plan.total_km(),
        plan.race_week().map(|w| w.start_date)
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_plan_request, setup_test_db, teardown_test_db};

    #[tokio::test]
    async fn test_create_and_load_roundtrip() {
        let pool = setup_test_db().await;
        let request = mock_plan_request();

        let plan_id = create_plan_request(&pool, &request, Some("runner@example.com"))
            .await
            .expect("Should store request");
        assert!(plan_id.starts_with("plan_"));

        let stored = load_plan_request(&pool, &plan_id)
            .await
            .expect("Should load request");
        assert_eq!(stored.plan_id, plan_id);
        assert_eq!(stored.request, request);
        assert_eq!(stored.email.as_deref(), Some("runner@example.com"));
        assert_eq!(stored.status, PlanStatus::Pending);
        assert!(stored.plan.is_none());
        assert!(stored.created_at.is_some());

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_stored() {
        let pool = setup_test_db().await;
        let mut request = mock_plan_request();
        request.sessions_per_week = 7;

        let result = create_plan_request(&pool, &request, None).await;
        assert!(matches!(
            result,
            Err(StoreError::Plan(crate::error::PlanError::UnsupportedSessionCount(7)))
        ));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plan_requests")
            .fetch_one(&pool)
            .await
            .expect("Should count");
        assert_eq!(count, 0);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_load_plan_request_not_found() {
        let pool = setup_test_db().await;

        let result = load_plan_request(&pool, "plan_missing").await;
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "plan_missing"));

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_generate_stored_plan_caches_plan() {
        let pool = setup_test_db().await;
        let request = mock_plan_request();
        let plan_id = create_plan_request(&pool, &request, None).await.unwrap();

        let plan = generate_stored_plan(&pool, &plan_id)
            .await
            .expect("Should generate plan");
        assert_eq!(plan.weeks.len(), 12);

        let stored = load_plan_request(&pool, &plan_id).await.unwrap();
        assert_eq!(stored.status, PlanStatus::Generated);
        assert!(stored.generated_at.is_some());
        let cached = stored.plan.expect("Plan should be cached");
        assert_eq!(cached.weeks, plan.weeks);

        // Regenerating yields the same plan
        let again = generate_stored_plan(&pool, &plan_id).await.unwrap();
        assert_eq!(again.weeks, plan.weeks);

        teardown_test_db(pool).await;
    }

    #[tokio::test]
    async fn test_list_plan_requests_newest_first() {
        let pool = setup_test_db().await;
        let first = create_plan_request(&pool, &mock_plan_request(), None).await.unwrap();
        let second = create_plan_request(&pool, &mock_plan_request(), None).await.unwrap();
        assert_ne!(first, second);

        let listed = list_plan_requests(&pool).await.expect("Should list");
        let ids: Vec<&str> = listed.iter().map(|r| r.plan_id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);

        teardown_test_db(pool).await;
    }
}
