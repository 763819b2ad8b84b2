//! Builds one training week: dated sessions with distances and paces.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

use super::paces::{pace_for, PaceZones};
use super::periodization::WeekType;
use super::sessions::{distance_for, session_types_for, SessionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// 1-based position within the week
    pub session_index: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub date: NaiveDate,
    pub pace: String,
    pub distance_km: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub week_number: u32,
    pub start_date: NaiveDate,
    /// Progressive volume target before the phase factor is applied
    pub week_volume: f64,
    pub week_factor: f64,
    /// week_volume x week_factor, a load indicator rather than a distance
    pub effective_load: f64,
    pub week_type: WeekType,
    pub sessions: Vec<Session>,
    pub total_km: u32,
}

/// Inputs for a single week, resolved by the plan builder.
#[derive(Debug, Clone, Copy)]
pub struct WeekInput {
    pub week_number: u32,
    pub monday: NaiveDate,
    pub sessions_per_week: u8,
    pub week_volume: f64,
    pub week_type: WeekType,
    pub week_factor: f64,
    pub is_race_week: bool,
    pub race_distance_km: f64,
}

pub fn build_week(input: &WeekInput, zones: &PaceZones) -> Result<Week, PlanError> {
    let session_types = session_types_for(input.sessions_per_week)?;

    let sessions: Vec<Session> = session_types
        .iter()
        .enumerate()
        .map(|(index, &session_type)| build_session(input, zones, index, session_type))
        .collect();

    let total_km: u32 = sessions.iter().map(|s| s.distance_km).sum();

    Ok(Week {
        week_number: input.week_number,
        start_date: input.monday,
        week_volume: input.week_volume,
        week_factor: input.week_factor,
        effective_load: input.week_volume * input.week_factor,
        week_type: input.week_type,
        sessions,
        total_km,
    })
}

fn build_session(
    input: &WeekInput,
    zones: &PaceZones,
    index: usize,
    session_type: SessionType,
) -> Session {
    // Race Day replaces the Long Run slot; the date stays on the long-run day.
    let final_type = if input.is_race_week && session_type == SessionType::LongRun {
        SessionType::RaceDay
    } else {
        session_type
    };

    Session {
        session_index: index as u32 + 1,
        session_type: final_type,
        date: input.monday + Duration::days(session_type.day_offset()),
        pace: pace_for(final_type, zones),
        distance_km: distance_for(
            final_type,
            input.week_volume,
            input.week_factor,
            input.sessions_per_week,
            input.race_distance_km,
        ),
    }
}
