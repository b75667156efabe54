//! Validated simulation configuration
//!
//! Shape of the config file. Reading and validating the file happens in the
//! CLI; the core consumes these types as already-checked data.

use serde::{Deserialize, Serialize};

/// One roster entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub strength: f64,
    pub alliance: String,
}

/// How many events of each kind to schedule
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EventCounts {
    pub alliance: u32,
    pub normal: u32,
}

/// Score payouts per finishing position, best first.
///
/// The alliance list needs one entry per distinct alliance, the normal list
/// one entry per team.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreTable {
    pub alliance: Vec<i64>,
    pub normal: Vec<i64>,
}

/// Full simulation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub teams: Vec<TeamConfig>,
    pub events: EventCounts,
    pub scores: ScoreTable,
}
