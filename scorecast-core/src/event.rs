//! Weighted placement engine
//!
//! An event resolves one random finishing order over its participant set,
//! weighted by strength, and pays out the configured score for each slot.

use rand::Rng;
use tracing::debug;

use crate::error::SimError;
use crate::participant::Participant;

/// Which participant set an event runs over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Scored across alliances; payouts fan out to member teams
    Alliance,
    /// Scored across individual teams
    Normal,
}

impl EventKind {
    /// Config section this kind draws its scores from
    pub fn section(self) -> &'static str {
        match self {
            EventKind::Alliance => "alliance",
            EventKind::Normal => "normal",
        }
    }
}

/// A scheduled scoring event: a participant class plus one score per
/// finishing position, best first.
///
/// One `Event` is built per scheduled occurrence at setup and reused across
/// all iterations; it has no state between iterations beyond the points it
/// writes to participants.
#[derive(Clone, Debug)]
pub struct Event {
    kind: EventKind,
    scores: Vec<i64>,
}

impl Event {
    pub fn new(kind: EventKind, scores: Vec<i64>) -> Self {
        Self { kind, scores }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Number of finishing slots, one per expected participant
    pub fn slots(&self) -> usize {
        self.scores.len()
    }

    /// Resolve one finishing order and pay out scores.
    ///
    /// Draws a winner for each slot from best to worst, weighted by strength,
    /// removing it from the pool before the next draw (weighted sampling
    /// without replacement). Participant order and membership are untouched;
    /// only their points change.
    pub fn score_event<R: Rng>(
        &self,
        entrants: &mut [&mut dyn Participant],
        rng: &mut R,
    ) -> Result<(), SimError> {
        if entrants.len() != self.scores.len() {
            return Err(SimError::ScoreCountMismatch {
                section: self.kind.section(),
                scores: self.scores.len(),
                entrants: entrants.len(),
            });
        }

        let mut remaining: Vec<usize> = (0..entrants.len()).collect();
        for (position, &score) in self.scores.iter().enumerate() {
            let slot = draw_winner(entrants, &remaining, rng);
            let winner = remaining.remove(slot);
            debug!(
                "Position {}: {} scores {}",
                position + 1,
                entrants[winner].name(),
                score
            );
            entrants[winner].score_points(score);
        }
        Ok(())
    }
}

/// Pick the next winner among `remaining` (indices into `entrants`),
/// returning its index within `remaining`.
///
/// Draws uniformly in `[0, total strength)` and walks the pool in order; the
/// first entrant whose cumulative strength reaches the draw wins. A pool
/// whose strengths sum to zero falls back to a uniform pick.
fn draw_winner<R: Rng>(
    entrants: &[&mut dyn Participant],
    remaining: &[usize],
    rng: &mut R,
) -> usize {
    let total_strength: f64 = remaining.iter().map(|&i| entrants[i].strength()).sum();
    if total_strength <= 0.0 {
        debug!("Zero total strength, picking uniformly");
        return rng.gen_range(0..remaining.len());
    }

    let winning_strength = rng.gen_range(0.0..total_strength);
    let mut cumulative = 0.0;
    for (slot, &i) in remaining.iter().enumerate() {
        cumulative += entrants[i].strength();
        if winning_strength <= cumulative {
            return slot;
        }
    }

    // Accumulation rounding can leave the draw unreached; the last entrant
    // takes the slot.
    remaining.len() - 1
}
