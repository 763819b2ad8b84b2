use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{Plan, PlanRequest, RaceDistance};
use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
  /// Request stored, plan not built yet
  #[default]
  Pending,
  /// Plan built and cached alongside the request
  Generated,
}

impl std::fmt::Display for PlanStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Pending => write!(f, "pending"),
      Self::Generated => write!(f, "generated"),
    }
  }
}

impl std::str::FromStr for PlanStatus {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(Self::Pending),
      "generated" => Ok(Self::Generated),
      _ => Err(format!("Unknown plan status: {}", s)),
    }
  }
}

/// Raw row from `plan_requests`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlanRequestRow {
  pub id: i64,
  pub plan_id: String,
  pub email: Option<String>,
  pub start_monday: NaiveDate,
  pub number_of_weeks: i64,
  pub sessions_per_week: i64,
  pub start_week_volume: f64,
  pub weekly_increase: f64,
  pub reference_distance: String,
  pub reference_time: String,
  pub race_distance: Option<String>,
  pub status: String,
  pub plan_json: Option<String>,
  pub generated_at: Option<DateTime<Utc>>,
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPlanRequest {
  pub id: i64,
  pub plan_id: String,
  pub email: Option<String>,
  pub request: PlanRequest,
  pub status: PlanStatus,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub plan: Option<Plan>,
  pub generated_at: Option<DateTime<Utc>>,
  pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<PlanRequestRow> for StoredPlanRequest {
  type Error = StoreError;

  fn try_from(row: PlanRequestRow) -> Result<Self, Self::Error> {
    let corrupt = |what: &str| StoreError::CorruptRecord(format!("{}: {}", row.plan_id, what));

    let number_of_weeks = u32::try_from(row.number_of_weeks).map_err(|_| corrupt("number_of_weeks"))?;
    let sessions_per_week = u8::try_from(row.sessions_per_week).map_err(|_| corrupt("sessions_per_week"))?;
    let race_distance: Option<RaceDistance> = row
      .race_distance
      .as_deref()
      .map(str::parse::<RaceDistance>)
      .transpose()
      .map_err(|_| corrupt("race_distance"))?;
    let status: PlanStatus = row.status.parse().map_err(|_| corrupt("status"))?;
    let plan = row
      .plan_json
      .as_deref()
      .map(serde_json::from_str::<Plan>)
      .transpose()?;

    Ok(Self {
      id: row.id,
      plan_id: row.plan_id,
      email: row.email,
      request: PlanRequest {
        start_monday: row.start_monday,
        number_of_weeks,
        sessions_per_week,
        start_week_volume: row.start_week_volume,
        weekly_increase: row.weekly_increase,
        reference_distance: row.reference_distance,
        reference_time: row.reference_time,
        race_distance,
      },
      status,
      plan,
      generated_at: row.generated_at,
      created_at: row.created_at,
    })
  }
}
