//! Plan builder: linear volume progression over periodized weeks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

use super::dates::week_monday;
use super::paces::{build_pace_zones, PaceZones, RaceDistance};
use super::periodization::{week_factor, week_type};
use super::sessions::DEFAULT_RACE_DISTANCE_KM;
use super::week::{build_week, Week, WeekInput};

/// Goal parameters for one plan.
///
/// Callers validate ranges: weeks and volumes are expected to be positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Monday of week 1
    pub start_monday: NaiveDate,
    pub number_of_weeks: u32,
    pub sessions_per_week: u8,
    pub start_week_volume: f64,
    #[serde(default)]
    pub weekly_increase: f64,
    pub reference_distance: String,
    pub reference_time: String,
    /// Target race; Race Day falls back to a half marathon when unset
    #[serde(default)]
    pub race_distance: Option<RaceDistance>,
}

impl PlanRequest {
    pub fn race_distance_km(&self) -> f64 {
        self.race_distance
            .map(|d| d.km())
            .unwrap_or(DEFAULT_RACE_DISTANCE_KM)
    }

    /// Progressive weekly volume for a 0-based week index.
    pub fn week_volume(&self, week_index: u32) -> f64 {
        self.start_week_volume + week_index as f64 * self.weekly_increase
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub request: PlanRequest,
    pub pace_zones: PaceZones,
    pub weeks: Vec<Week>,
}

impl Plan {
    pub fn total_km(&self) -> u32 {
        self.weeks.iter().map(|w| w.total_km).sum()
    }

    pub fn race_week(&self) -> Option<&Week> {
        self.weeks.last()
    }
}

/// Build the full plan. Pace zones are derived once and shared by every week.
pub fn build_plan(request: &PlanRequest) -> Result<Plan, PlanError> {
    let pace_zones = build_pace_zones(&request.reference_distance, &request.reference_time)?;
    let race_distance_km = request.race_distance_km();

    let weeks = (0..request.number_of_weeks)
        .map(|i| {
            let week_number = i + 1;
            let week_type = week_type(week_number, request.number_of_weeks);

            let input = WeekInput {
                week_number,
                monday: week_monday(request.start_monday, i),
                sessions_per_week: request.sessions_per_week,
                week_volume: request.week_volume(i),
                week_type,
                week_factor: week_factor(week_type),
                is_race_week: week_number == request.number_of_weeks,
                race_distance_km,
            };
            build_week(&input, &pace_zones)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Plan {
        request: request.clone(),
        pace_zones,
        weeks,
    })
}
