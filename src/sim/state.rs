//! Match state and core simulation types
//!
//! `MatchState` is the single mutable aggregate. Only the tick mutates it;
//! everything downstream reads a `MatchSnapshot`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pitch;

/// One of the two teams on the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// A circular player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub pos: Vec2,
    /// Displacement applied this tick. Output only, never integrated.
    pub vel: Vec2,
}

impl Agent {
    /// Agent standing still on its kickoff spot
    pub fn at_kickoff(side: Side) -> Self {
        Self {
            pos: pitch::kickoff_spot(side),
            vel: Vec2::ZERO,
        }
    }
}

/// The ball. Its velocity persists between ticks and decays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at rest on the centre spot
    pub fn at_kickoff() -> Self {
        Self {
            pos: pitch::center(),
            vel: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Goals per side. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    /// Add one goal to a side
    pub fn credit(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.home + self.away
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub home: Agent,
    pub away: Agent,
    pub ball: Ball,
    pub score: Score,
    /// Whole seconds of un-paused play
    pub elapsed_seconds: u32,
    /// Physics ticks run so far
    pub time_ticks: u64,
    pub paused: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh match: kickoff positions, 0-0, clock at zero
    pub fn new() -> Self {
        Self {
            home: Agent::at_kickoff(Side::Home),
            away: Agent::at_kickoff(Side::Away),
            ball: Ball::at_kickoff(),
            score: Score::default(),
            elapsed_seconds: 0,
            time_ticks: 0,
            paused: false,
        }
    }

    pub fn agent(&self, side: Side) -> &Agent {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Put all three bodies back on their kickoff spots at rest.
    /// Score and clock are untouched.
    pub fn reset_positions(&mut self) {
        self.home = Agent::at_kickoff(Side::Home);
        self.away = Agent::at_kickoff(Side::Away);
        self.ball = Ball::at_kickoff();
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            home_position: self.home.pos,
            away_position: self.away.pos,
            ball_position: self.ball.pos,
            score: self.score,
            elapsed_seconds: self.elapsed_seconds,
            paused: self.paused,
        }
    }
}

/// Read-only view sampled by a renderer every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub home_position: Vec2,
    pub away_position: Vec2,
    pub ball_position: Vec2,
    pub score: Score,
    pub elapsed_seconds: u32,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_at_kickoff() {
        let state = MatchState::new();
        assert_eq!(state.home.pos, Vec2::new(300.0, 400.0));
        assert_eq!(state.away.pos, Vec2::new(900.0, 400.0));
        assert_eq!(state.ball.pos, Vec2::new(600.0, 400.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.elapsed_seconds, 0);
        assert!(!state.paused);
    }

    #[test]
    fn test_reset_keeps_score_and_clock() {
        let mut state = MatchState::new();
        state.score.credit(Side::Away);
        state.elapsed_seconds = 42;
        state.home.pos = Vec2::new(100.0, 100.0);
        state.away.vel = Vec2::new(3.0, 4.0);
        state.ball.vel = Vec2::new(9.0, 0.0);

        state.reset_positions();

        assert_eq!(state.home, Agent::at_kickoff(Side::Home));
        assert_eq!(state.away, Agent::at_kickoff(Side::Away));
        assert_eq!(state.ball, Ball::at_kickoff());
        assert_eq!(state.score.away, 1);
        assert_eq!(state.elapsed_seconds, 42);
    }

    #[test]
    fn test_snapshot_serializes_for_renderer() {
        let state = MatchState::new();
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["score"]["home"], 0);
        assert_eq!(json["elapsed_seconds"], 0);
        assert_eq!(json["ball_position"][0], 600.0);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
        assert_eq!(Side::Away.as_str(), "away");
    }
}
