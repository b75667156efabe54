//! Simulation driver - roster construction, event schedule, ranking

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::SimError;
use crate::event::{Event, EventKind};
use crate::participant::{Alliance, Participant, Team};

/// Upper bound on a single run's iteration count
pub const MAX_ITERATIONS: u64 = 1_000_000;

/// Aggregated result for one team, reported after a run
#[derive(Clone, Debug, Serialize)]
pub struct Standing {
    pub name: String,
    pub alliance: String,
    pub total_points: i64,
    pub total_positions: u64,
    pub average_position: f64,
    pub average_points: f64,
}

/// Simulation driver: owns the roster and the event schedule, runs
/// iterations, and aggregates per-team standings.
#[derive(Clone, Debug)]
pub struct Sim {
    alliances: Vec<Alliance>,
    events: Vec<Event>,
    iterations_run: u64,
}

impl Sim {
    /// Build the roster and event schedule from a validated config.
    ///
    /// Fails with [`SimError::ScoreCountMismatch`] if any scheduled event's
    /// score list does not match its participant count; no partially-built
    /// simulation is returned.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let mut sim = Sim {
            alliances: Vec::new(),
            events: Vec::new(),
            iterations_run: 0,
        };

        for team in &config.teams {
            sim.add_team(team.name.clone(), team.alliance.clone(), team.strength);
        }

        // Alliance events run before normal events within an iteration
        for _ in 0..config.events.alliance {
            sim.add_event(EventKind::Alliance, config.scores.alliance.clone())?;
        }
        for _ in 0..config.events.normal {
            sim.add_event(EventKind::Normal, config.scores.normal.clone())?;
        }

        Ok(sim)
    }

    fn add_team(&mut self, name: String, alliance: String, strength: f64) {
        info!(
            "Adding team {} (alliance {}, strength {})",
            name, alliance, strength
        );
        let team = Team::new(name, alliance.clone(), strength);
        match self.alliances.iter_mut().find(|a| a.name == alliance) {
            Some(existing) => existing.add_team(team),
            None => {
                info!("Adding new alliance {}", alliance);
                let mut created = Alliance::new(alliance);
                created.add_team(team);
                self.alliances.push(created);
            }
        }
    }

    fn add_event(&mut self, kind: EventKind, scores: Vec<i64>) -> Result<(), SimError> {
        let entrants = match kind {
            EventKind::Alliance => self.alliances.len(),
            EventKind::Normal => self.team_count(),
        };
        if scores.len() != entrants {
            return Err(SimError::ScoreCountMismatch {
                section: kind.section(),
                scores: scores.len(),
                entrants,
            });
        }
        debug!("Scheduling {} event with {} slots", kind.section(), scores.len());
        self.events.push(Event::new(kind, scores));
        Ok(())
    }

    /// Run `iterations` further iterations, advancing `rng` strictly in call
    /// order so seeded runs reproduce exactly.
    pub fn run<R: Rng>(&mut self, iterations: u64, rng: &mut R) -> Result<(), SimError> {
        if iterations > MAX_ITERATIONS {
            return Err(SimError::InvalidIterationCount {
                requested: iterations,
                max: MAX_ITERATIONS,
            });
        }

        for iteration in 0..iterations {
            debug!("Running iteration {}", iteration);
            self.run_iteration(rng)?;
            self.iterations_run += 1;
        }
        Ok(())
    }

    /// Score every scheduled event, then rank and fold the results
    fn run_iteration<R: Rng>(&mut self, rng: &mut R) -> Result<(), SimError> {
        for event in &self.events {
            match event.kind() {
                EventKind::Alliance => {
                    let mut entrants: Vec<&mut dyn Participant> = self
                        .alliances
                        .iter_mut()
                        .map(|a| a as &mut dyn Participant)
                        .collect();
                    event.score_event(&mut entrants, rng)?;
                }
                EventKind::Normal => {
                    let mut entrants: Vec<&mut dyn Participant> = self
                        .alliances
                        .iter_mut()
                        .flat_map(|a| a.teams_mut())
                        .map(|t| t as &mut dyn Participant)
                        .collect();
                    event.score_event(&mut entrants, rng)?;
                }
            }
        }

        self.rank_teams();
        Ok(())
    }

    /// Convert this iteration's points into competition-style positions and
    /// fold them into the running totals.
    ///
    /// Ties share a position and the counter still advances once per team,
    /// so points of [50, 50, 30, 10] rank as [1, 1, 3, 4]. Points are zeroed
    /// in a separate pass once every team has been folded; resetting inside
    /// the walk would let an already-ranked team re-match a later zero-value
    /// group.
    fn rank_teams(&mut self) {
        let mut values: Vec<i64> = self.teams().map(|t| t.points).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();

        let mut position: u64 = 1;
        for value in values {
            let mut next = position;
            for team in self.alliances.iter_mut().flat_map(|a| a.teams_mut()) {
                if team.points == value {
                    team.record_result(position);
                    next += 1;
                }
            }
            position = next;
        }

        for team in self.alliances.iter_mut().flat_map(|a| a.teams_mut()) {
            team.reset_points();
        }
    }

    /// All teams, flattened in alliance insertion order
    pub fn teams(&self) -> impl Iterator<Item = &Team> + '_ {
        self.alliances.iter().flat_map(|a| a.teams().iter())
    }

    pub fn alliances(&self) -> &[Alliance] {
        &self.alliances
    }

    /// Completed iterations across all `run` calls
    pub fn iterations_run(&self) -> u64 {
        self.iterations_run
    }

    fn team_count(&self) -> usize {
        self.alliances.iter().map(|a| a.teams().len()).sum()
    }

    /// Per-team standings, sorted by team name ascending.
    ///
    /// Averages are defined as 0.0 until at least one iteration has
    /// completed.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .teams()
            .map(|team| Standing {
                name: team.name.clone(),
                alliance: team.alliance.clone(),
                total_points: team.total_points,
                total_positions: team.total_positions,
                average_position: average(team.total_positions as f64, self.iterations_run),
                average_points: average(team.total_points as f64, self.iterations_run),
            })
            .collect();
        standings.sort_by(|a, b| a.name.cmp(&b.name));
        standings
    }
}

fn average(total: f64, iterations: u64) -> f64 {
    if iterations == 0 {
        0.0
    } else {
        total / iterations as f64
    }
}
