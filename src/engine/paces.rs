//! Pace zones derived from a single reference performance.
//!
//! The reference time over a known distance gives a base pace in seconds per
//! kilometer. Every training pace is a fixed offset or ratio of that base:
//! - easy  = base + 60 s/km
//! - long  = easy x 0.93
//! - tempo = base + 10 s/km
//! - race  = base + 15 s/km

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

use super::sessions::SessionType;

const EASY_OFFSET_SECS: f64 = 60.0;
const LONG_RATIO: f64 = 0.93;
const TEMPO_OFFSET_SECS: f64 = 10.0;
const RACE_OFFSET_SECS: f64 = 15.0;

// ---------------------------------------------------------------------------
/// Race Distance: Supported reference and target distances
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    #[serde(rename = "5K")]
    FiveK,
    #[serde(rename = "10K")]
    TenK,
    #[serde(rename = "15K")]
    FifteenK,
    #[serde(rename = "HM")]
    HalfMarathon,
}

impl RaceDistance {
    pub fn km(&self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::FifteenK => 15.0,
            Self::HalfMarathon => 21.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::FifteenK => "15K",
            Self::HalfMarathon => "HM",
        }
    }
}

impl std::fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RaceDistance {
    type Err = PlanError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5K" => Ok(Self::FiveK),
            "10K" => Ok(Self::TenK),
            "15K" => Ok(Self::FifteenK),
            "HM" => Ok(Self::HalfMarathon),
            _ => Err(PlanError::UnknownDistance(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
/// Pace: seconds per kilometer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pace(pub f64);

/// Formats as `M:SS /km`, rounded to the nearest whole second first.
impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self.0.round() as i64;
        write!(f, "{}:{:02} /km", rounded / 60, rounded % 60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceZones {
    pub easy: Pace,
    pub long: Pace,
    pub tempo: Pace,
    pub race: Pace,
}

/// Parse `mm:ss` or `h:mm:ss` into total seconds.
///
/// Every component is a run of ASCII digits; signs and inner whitespace are
/// rejected, surrounding whitespace is trimmed. The two-part form takes any
/// seconds value (`45:75` is 46:15). Totals too large for `u64` are rejected.
pub fn parse_reference_time(time: &str) -> Result<u64, PlanError> {
    let invalid = || PlanError::InvalidTimeFormat(time.to_string());

    let parts = time
        .trim()
        .split(':')
        .map(|p| parse_component(p).ok_or_else(invalid))
        .collect::<Result<Vec<_>, _>>()?;

    let total = match parts.as_slice() {
        [m, s] => m.checked_mul(60).and_then(|t| t.checked_add(*s)),
        [h, m, s] if *m < 60 && *s < 60 => h
            .checked_mul(3600)
            .and_then(|t| t.checked_add(m * 60 + s)),
        _ => None,
    };
    total.ok_or_else(invalid)
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Derive all pace zones from one reference performance.
pub fn build_pace_zones(reference_distance: &str, reference_time: &str) -> Result<PaceZones, PlanError> {
    let distance: RaceDistance = reference_distance.parse()?;
    let total_seconds = parse_reference_time(reference_time)?;
    Ok(zones_from_base(total_seconds as f64 / distance.km()))
}

fn zones_from_base(base: f64) -> PaceZones {
    let easy = base + EASY_OFFSET_SECS;
    PaceZones {
        easy: Pace(easy),
        long: Pace(easy * LONG_RATIO),
        tempo: Pace(base + TEMPO_OFFSET_SECS),
        race: Pace(base + RACE_OFFSET_SECS),
    }
}

/// Formatted target pace for a session role.
pub fn pace_for(session_type: SessionType, zones: &PaceZones) -> String {
    let pace = match session_type {
        SessionType::RaceDay => zones.race,
        SessionType::TempoRun => zones.tempo,
        SessionType::LongRun => zones.long,
        SessionType::EasyRun1 | SessionType::EasyRun2 | SessionType::EasyRun3 => zones.easy,
    };
    pace.to_string()
}
