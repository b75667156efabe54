//! Error types for simulation setup and runs

/// Errors surfaced while building or running a simulation
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An event's score list does not line up with its participant set.
    /// Raised at setup, before any iteration runs.
    #[error("{section} events need one score per participant: {scores} scores for {entrants} participants")]
    ScoreCountMismatch {
        section: &'static str,
        scores: usize,
        entrants: usize,
    },

    /// Iteration request outside the supported range.
    #[error("iteration count {requested} exceeds the maximum of {max}")]
    InvalidIterationCount { requested: u64, max: u64 },
}
