//! Session roles, their weekday slots and their share of weekly volume.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Distance used for Race Day when the plan has no explicit target race.
pub const DEFAULT_RACE_DISTANCE_KM: f64 = 21.1;

const TEMPO_SHARE: f64 = 0.25;

// ---------------------------------------------------------------------------
/// Session Type: Role of a session within its week
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "Easy Run 1")]
    EasyRun1,
    #[serde(rename = "Tempo Run")]
    TempoRun,
    #[serde(rename = "Easy Run 2")]
    EasyRun2,
    #[serde(rename = "Easy Run 3")]
    EasyRun3,
    #[serde(rename = "Long Run")]
    LongRun,
    /// Replaces the Long Run in the final week
    #[serde(rename = "Race Day")]
    RaceDay,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EasyRun1 => "Easy Run 1",
            Self::TempoRun => "Tempo Run",
            Self::EasyRun2 => "Easy Run 2",
            Self::EasyRun3 => "Easy Run 3",
            Self::LongRun => "Long Run",
            Self::RaceDay => "Race Day",
        }
    }

    /// Days after the week's Monday on which this session falls.
    pub fn day_offset(&self) -> i64 {
        match self {
            Self::EasyRun3 => 0,
            Self::EasyRun1 => 1,
            Self::TempoRun => 3,
            Self::EasyRun2 => 5,
            Self::LongRun | Self::RaceDay => 6,
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const THREE_SESSIONS: [SessionType; 3] = [
    SessionType::EasyRun1,
    SessionType::TempoRun,
    SessionType::LongRun,
];

const FOUR_SESSIONS: [SessionType; 4] = [
    SessionType::EasyRun1,
    SessionType::TempoRun,
    SessionType::EasyRun2,
    SessionType::LongRun,
];

const FIVE_SESSIONS: [SessionType; 5] = [
    SessionType::EasyRun1,
    SessionType::TempoRun,
    SessionType::EasyRun2,
    SessionType::EasyRun3,
    SessionType::LongRun,
];

/// Ordered session roles for a week with `sessions_per_week` sessions.
pub fn session_types_for(sessions_per_week: u8) -> Result<&'static [SessionType], PlanError> {
    match sessions_per_week {
        3 => Ok(&THREE_SESSIONS),
        4 => Ok(&FOUR_SESSIONS),
        5 => Ok(&FIVE_SESSIONS),
        n => Err(PlanError::UnsupportedSessionCount(n)),
    }
}

/// Fraction of weekly volume assigned to a session role.
///
/// The three- and four-session tables sum to 1.0. The five-session table sums
/// to 1.10 (three easy runs at 0.15 plus a 0.40 long run), so a five-session
/// week plans about 10% more than its volume target.
///
/// Combinations that never occur in a built week (Race Day, or an easy run
/// beyond the week's count) get 0.0.
pub fn share_for(session_type: SessionType, sessions_per_week: u8) -> f64 {
    use SessionType::*;

    match (session_type, sessions_per_week) {
        (TempoRun, _) => TEMPO_SHARE,
        (EasyRun1, 3) => 0.30,
        (LongRun, 3) => 0.45,
        (EasyRun1, 4) => 0.20,
        (EasyRun2, 4) => 0.15,
        (LongRun, 4) => 0.40,
        (EasyRun1 | EasyRun2 | EasyRun3, 5) => 0.15,
        (LongRun, 5) => 0.40,
        _ => 0.0,
    }
}

/// Session distance in whole kilometers.
///
/// Race Day is always the race distance; every other role is its share of the
/// phase-adjusted weekly volume.
pub fn distance_for(
    session_type: SessionType,
    week_volume: f64,
    week_factor: f64,
    sessions_per_week: u8,
    race_distance_km: f64,
) -> u32 {
    let km = match session_type {
        SessionType::RaceDay => race_distance_km,
        other => week_volume * week_factor * share_for(other, sessions_per_week),
    };
    km.round() as u32
}
