//! Teams and alliances - the scoring participants

use tracing::{debug, info};

/// Common capability of anything that can enter an event: a display name, a
/// selection weight, and the ability to receive points for a finishing slot.
pub trait Participant {
    /// Display name
    fn name(&self) -> &str;
    /// Selection weight for the placement draw
    fn strength(&self) -> f64;
    /// Award points for a finishing slot
    fn score_points(&mut self, amount: i64);
}

/// A single team with per-iteration and running score accumulators
#[derive(Clone, Debug)]
pub struct Team {
    pub name: String,
    /// Name of the enclosing alliance
    pub alliance: String,
    pub strength: f64,
    /// Points scored in the current iteration; zeroed after ranking
    pub points: i64,
    /// Sum of points across all completed iterations
    pub total_points: i64,
    /// Sum of finishing positions across all completed iterations
    pub total_positions: u64,
}

impl Team {
    pub fn new(name: impl Into<String>, alliance: impl Into<String>, strength: f64) -> Self {
        Self {
            name: name.into(),
            alliance: alliance.into(),
            strength,
            points: 0,
            total_points: 0,
            total_positions: 0,
        }
    }

    /// Fold the current iteration's points and finishing position into the
    /// running totals. Leaves `points` untouched; the driver zeroes every
    /// team once the whole ranking pass is done.
    pub fn record_result(&mut self, position: u64) {
        debug!(
            "Team {} scored {} points in position {}",
            self.name, self.points, position
        );
        self.total_points += self.points;
        self.total_positions += position;
    }

    /// Clear the per-iteration accumulator
    pub fn reset_points(&mut self) {
        self.points = 0;
    }
}

impl Participant for Team {
    fn name(&self) -> &str {
        &self.name
    }

    fn strength(&self) -> f64 {
        self.strength
    }

    fn score_points(&mut self, amount: i64) {
        debug!("Team {} scoring {} points", self.name, amount);
        self.points += amount;
    }
}

/// A named group of teams. Strength is derived: the sum of member strengths,
/// maintained as teams are added. Teams are never removed once added.
#[derive(Clone, Debug)]
pub struct Alliance {
    pub name: String,
    strength: f64,
    teams: Vec<Team>,
}

impl Alliance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strength: 0.0,
            teams: Vec::new(),
        }
    }

    /// Add a member team, folding its strength into the alliance total
    pub fn add_team(&mut self, team: Team) {
        info!("Added {} to alliance {}", team.name, self.name);
        self.strength += team.strength;
        self.teams.push(team);
    }

    /// Member teams in the order they were added
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }
}

impl Participant for Alliance {
    fn name(&self) -> &str {
        &self.name
    }

    fn strength(&self) -> f64 {
        self.strength
    }

    /// Fan the same amount out to every member team
    fn score_points(&mut self, amount: i64) {
        debug!("Alliance {} scoring {} points", self.name, amount);
        for team in &mut self.teams {
            team.score_points(amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_scoring_accumulates() {
        let mut team = Team::new("falcons", "north", 5.0);
        team.score_points(3);
        team.score_points(2);
        assert_eq!(team.points, 5);
        assert_eq!(team.total_points, 0);
    }

    #[test]
    fn test_record_result_folds_totals() {
        let mut team = Team::new("falcons", "north", 5.0);
        team.score_points(7);
        team.record_result(2);
        assert_eq!(team.total_points, 7);
        assert_eq!(team.total_positions, 2);
        // Points survive until the explicit reset
        assert_eq!(team.points, 7);
        team.reset_points();
        assert_eq!(team.points, 0);
    }

    #[test]
    fn test_alliance_strength_tracks_members() {
        let mut alliance = Alliance::new("north");
        assert_eq!(alliance.strength(), 0.0);

        let strengths = [4.0, 2.5, 3.5];
        let mut expected = 0.0;
        for (i, &s) in strengths.iter().enumerate() {
            alliance.add_team(Team::new(format!("team-{}", i), "north", s));
            expected += s;
            assert_eq!(alliance.strength(), expected);
        }
        assert_eq!(alliance.teams().len(), 3);
    }

    #[test]
    fn test_alliance_score_fans_out_to_members() {
        let mut alliance = Alliance::new("north");
        alliance.add_team(Team::new("falcons", "north", 1.0));
        alliance.add_team(Team::new("otters", "north", 2.0));

        alliance.score_points(4);

        for team in alliance.teams() {
            assert_eq!(team.points, 4);
        }
    }

    #[test]
    fn test_alliance_preserves_insertion_order() {
        let mut alliance = Alliance::new("north");
        alliance.add_team(Team::new("falcons", "north", 1.0));
        alliance.add_team(Team::new("otters", "north", 2.0));
        alliance.add_team(Team::new("ravens", "north", 3.0));

        let names: Vec<&str> = alliance.teams().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["falcons", "otters", "ravens"]);
    }
}
