//! Kickabout - a minimal two-player soccer match
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, physics, collisions, AI, scoring)
//! - `clock`: Fixed-step scheduling of the 60 Hz physics and 1 Hz match timer
//! - `simulation`: Match lifecycle (start, pause/resume, quit) and snapshots
//! - `config`: Match configuration (teams and game mode)
//! - `teams`: Built-in team roster

pub mod clock;
pub mod config;
pub mod error;
pub mod sim;
pub mod simulation;
pub mod teams;

pub use clock::{ClockTicks, SimulationClock};
pub use config::{GameMode, MatchConfig};
pub use error::{ConfigError, SimError};
pub use simulation::{Lifecycle, Simulation};
pub use teams::Team;

/// Pitch geometry and tuning constants
pub mod consts {
    use std::time::Duration;

    /// Physics tick rate
    pub const PHYSICS_HZ: u32 = 60;
    /// Fixed physics period (1/60 s)
    pub const PHYSICS_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / PHYSICS_HZ as u64);
    /// Match timer period
    pub const TIMER_PERIOD: Duration = Duration::from_secs(1);
    /// Longest frame delta fed to the physics accumulator. Bounds catch-up
    /// after a stall to 7 physics ticks per frame.
    pub const MAX_FRAME: Duration = Duration::from_millis(100);

    /// Pitch dimensions
    pub const PITCH_WIDTH: f32 = 1200.0;
    pub const PITCH_HEIGHT: f32 = 800.0;
    /// Dead band between the pitch edge and the touchlines
    pub const PITCH_MARGIN: f32 = 30.0;

    /// Vertical span of each goal mouth, centred on the halfway height
    pub const GOAL_WIDTH: f32 = 140.0;
    /// Distance from the outer edge at which a ball in the mouth counts as a goal
    pub const GOAL_LINE_DEPTH: f32 = 15.0;

    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const BALL_RADIUS: f32 = 10.0;

    /// Human agent step per active key (px/tick)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// CPU agent step (px/tick), slower than a human on purpose
    pub const AI_SPEED: f32 = 5.0;
    /// Ticks of ball travel the CPU predicts ahead
    pub const AI_LOOKAHEAD: f32 = 10.0;
    /// CPU stops steering once this close to its aim point
    pub const AI_DEAD_ZONE: f32 = 5.0;

    /// Per-tick ball velocity decay
    pub const BALL_FRICTION: f32 = 0.985;
    /// Velocity factor applied to the normal component on a wall bounce
    pub const WALL_RESTITUTION: f32 = -0.6;
    /// Ball speed after any agent touch (px/tick)
    pub const KICK_POWER: f32 = 12.0;

    /// Horizontal distance of each agent's kickoff spot from its own edge
    pub const KICKOFF_OFFSET: f32 = 300.0;
}

/// Format elapsed match seconds as `m:ss` for a scoreboard
pub fn format_match_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
