//! Config file loading and validation
//!
//! The core consumes a `SimConfig` it can trust; everything about reading
//! YAML and checking cross-field counts happens here.

use std::path::Path;

use anyhow::{bail, Context, Result};

use scorecast_core::SimConfig;

/// Load and validate a YAML config file
pub fn load_config(path: &Path) -> Result<SimConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: SimConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    validate(&config)?;
    Ok(config)
}

/// Check the cross-field rules the deserializer cannot express
fn validate(config: &SimConfig) -> Result<()> {
    for team in &config.teams {
        if team.strength <= 0.0 {
            bail!(
                "Team {} must have a positive strength, got {}",
                team.name,
                team.strength
            );
        }
    }

    for (i, team) in config.teams.iter().enumerate() {
        if config.teams[..i].iter().any(|other| other.name == team.name) {
            bail!("Duplicate team name: {}", team.name);
        }
    }

    let teams = config.teams.len();
    if teams != config.scores.normal.len() {
        bail!(
            "Must have the same number of teams as scoring options in normal events, \
             have {} teams and {} score options",
            teams,
            config.scores.normal.len()
        );
    }

    let alliances = distinct_alliances(config);
    if alliances != config.scores.alliance.len() {
        bail!(
            "Must have the same number of alliances as scoring options in alliance events, \
             have {} alliances and {} score options",
            alliances,
            config.scores.alliance.len()
        );
    }

    Ok(())
}

fn distinct_alliances(config: &SimConfig) -> usize {
    let mut names: Vec<&str> = config.teams.iter().map(|t| t.alliance.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecast_core::{EventCounts, ScoreTable, TeamConfig};
    use std::io::Write;

    fn valid_config() -> SimConfig {
        SimConfig {
            teams: vec![
                TeamConfig {
                    name: "falcons".into(),
                    strength: 10.0,
                    alliance: "north".into(),
                },
                TeamConfig {
                    name: "ravens".into(),
                    strength: 5.0,
                    alliance: "south".into(),
                },
            ],
            events: EventCounts {
                alliance: 1,
                normal: 1,
            },
            scores: ScoreTable {
                alliance: vec![4, 2],
                normal: vec![3, 1],
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_non_positive_strength_rejected() {
        let mut config = valid_config();
        config.teams[0].strength = 0.0;

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("positive strength"));
    }

    #[test]
    fn test_duplicate_team_name_rejected() {
        let mut config = valid_config();
        config.teams[1].name = "falcons".into();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("Duplicate team name"));
    }

    #[test]
    fn test_normal_score_count_mismatch_rejected() {
        let mut config = valid_config();
        config.scores.normal = vec![3, 2, 1];

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("2 teams and 3 score options"));
    }

    #[test]
    fn test_alliance_score_count_mismatch_rejected() {
        let mut config = valid_config();
        config.scores.alliance = vec![4];

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("2 alliances and 1 score options"));
    }

    #[test]
    fn test_load_config_from_file() {
        let yaml = "\
teams:
  - name: falcons
    strength: 10
    alliance: north
  - name: ravens
    strength: 5
    alliance: south
events:
  alliance: 1
  normal: 2
scores:
  alliance: [4, 2]
  normal: [3, 1]
";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.teams.len(), 2);
        assert_eq!(config.teams[0].name, "falcons");
        assert_eq!(config.events.normal, 2);
        assert_eq!(config.scores.alliance, vec![4, 2]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Path::new("/no/such/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/config.yaml"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"teams: [not, a, team, list]").unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
