//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - Stable stage order within a tick (home before away)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod input;
pub mod physics;
pub mod pitch;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, circle_overlap, resolve_kick};
pub use input::{Direction, InputState, Key};
pub use pitch::Bounds;
pub use state::{Agent, Ball, MatchSnapshot, MatchState, Score, Side};
pub use tick::{TickOutcome, tick};
