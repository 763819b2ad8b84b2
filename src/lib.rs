pub mod commands;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use engine::{build_plan, monday_of, Plan, PlanRequest};
pub use error::{PlanError, StoreError};
