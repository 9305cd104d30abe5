//! Schedule models.

use serde::{Deserialize, Serialize};

/// A scheduled action running against a package resource.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Schedule {
    /// Resource the schedule applies to (e.g., a model path).
    pub resource: String,
    /// Cron-style schedule expression.
    pub schedule: String,
    /// Action performed on each run.
    pub action: String,
    /// Connection the action runs against.
    pub connection: String,
    /// Epoch milliseconds of the last run.
    #[serde(rename = "lastRunTime")]
    pub last_run_time: f64,
    /// Status string of the last run.
    #[serde(rename = "lastRunStatus")]
    pub last_run_status: String,
}
