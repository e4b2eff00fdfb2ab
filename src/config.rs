//! Match configuration
//!
//! Chosen once before kickoff and immutable for the whole match. Loaded
//! from a JSON file naming the two teams and the game mode.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::teams::{self, Team};

/// Who controls the away agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Human vs CPU
    #[default]
    Pve,
    /// Two humans on one keyboard
    Pvp,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Pve => "pve",
            GameMode::Pvp => "pvp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pve" | "cpu" => Some(GameMode::Pve),
            "pvp" => Some(GameMode::Pvp),
            _ => None,
        }
    }

    /// Whether the away agent is steered by the CPU
    pub fn away_is_cpu(&self) -> bool {
        *self == GameMode::Pve
    }
}

/// Everything the simulation is told at kickoff
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchConfig {
    pub home_team: Team,
    pub away_team: Team,
    pub mode: GameMode,
}

/// On-disk form: teams by id
#[derive(Debug, Deserialize)]
struct MatchConfigFile {
    home_team: String,
    away_team: String,
    #[serde(default)]
    mode: GameMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let (home_team, away_team) = teams::default_pair();
        Self {
            home_team,
            away_team,
            mode: GameMode::default(),
        }
    }
}

impl MatchConfig {
    /// Resolve two built-in teams by id. A team cannot play itself.
    pub fn new(home_id: &str, away_id: &str, mode: GameMode) -> Result<Self, ConfigError> {
        let home_team =
            teams::find(home_id).ok_or_else(|| ConfigError::UnknownTeam(home_id.to_string()))?;
        let away_team =
            teams::find(away_id).ok_or_else(|| ConfigError::UnknownTeam(away_id.to_string()))?;
        Self::from_teams(home_team, away_team, mode)
    }

    /// Build from arbitrary teams, rejecting identical ids
    pub fn from_teams(home_team: Team, away_team: Team, mode: GameMode) -> Result<Self, ConfigError> {
        if home_team.id == away_team.id {
            return Err(ConfigError::SameTeam(home_team.id));
        }
        Ok(Self {
            home_team,
            away_team,
            mode,
        })
    }

    /// Parse `{"home_team": "...", "away_team": "...", "mode": "pve"|"pvp"}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: MatchConfigFile = serde_json::from_str(json)?;
        Self::new(&file.home_team, &file.away_team, file.mode)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!(
            "Loaded match config from {}: {} vs {} ({})",
            path.display(),
            config.home_team.short_name,
            config.away_team.short_name,
            config.mode.as_str()
        );
        Ok(config)
    }
}
