//! Plan-generation engine
//!
//! Pure, deterministic calculations that turn goal parameters into a
//! multi-week running plan. No I/O, no clock reads, no shared state: every
//! call allocates its own output and may run concurrently with any other.
//!
//! Flow: `build_plan` derives pace zones once, then for each week resolves
//! the phase (build / recovery / taper) and builds that week's sessions.

pub mod dates;
pub mod paces;
pub mod periodization;
pub mod plan;
pub mod sessions;
pub mod week;

pub use dates::{monday_of, plan_start_for_race};
pub use paces::{build_pace_zones, pace_for, Pace, PaceZones, RaceDistance};
pub use periodization::{week_factor, week_type, WeekType};
pub use plan::{build_plan, Plan, PlanRequest};
pub use sessions::{distance_for, session_types_for, share_for, SessionType};
pub use week::{build_week, Session, Week, WeekInput};
