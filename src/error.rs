use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Plan Engine Errors
/// ---------------------------------------------------------------------------

/// Input errors raised while building a plan. A failed build yields no output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
  #[error("Unknown reference distance: {0}")]
  UnknownDistance(String),

  #[error("Invalid time format: {0}")]
  InvalidTimeFormat(String),

  #[error("Unsupported sessions per week: {0} (expected 3, 4 or 5)")]
  UnsupportedSessionCount(u8),
}

impl Serialize for PlanError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Store Errors
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Plan request not found: {0}")]
  NotFound(String),

  #[error("Corrupt plan record: {0}")]
  CorruptRecord(String),

  #[error(transparent)]
  Plan(#[from] PlanError),
}
