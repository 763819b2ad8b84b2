//! Week classification into build, recovery and taper phases.

use serde::{Deserialize, Serialize};

/// Every Nth week is a recovery week.
const RECOVERY_EVERY: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekType {
    Build,
    Recovery,
    Taper,
}

impl WeekType {
    /// Load multiplier applied to the week's volume.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Build => 1.0,
            Self::Recovery => 0.8,
            Self::Taper => 0.6,
        }
    }
}

impl std::fmt::Display for WeekType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Recovery => write!(f, "recovery"),
            Self::Taper => write!(f, "taper"),
        }
    }
}

/// Phase of a 1-indexed week. The final two weeks taper, and taper wins over
/// the every-fourth-week recovery rule.
pub fn week_type(week_number: u32, total_weeks: u32) -> WeekType {
    if week_number + 1 >= total_weeks {
        WeekType::Taper
    } else if week_number % RECOVERY_EVERY == 0 {
        WeekType::Recovery
    } else {
        WeekType::Build
    }
}

pub fn week_factor(week_type: WeekType) -> f64 {
    week_type.factor()
}
