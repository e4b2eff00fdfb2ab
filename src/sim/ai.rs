//! CPU opponent
//!
//! A single pursuit law: aim at where the ball will be `AI_LOOKAHEAD` ticks
//! from now if it kept its current velocity, and walk there at `AI_SPEED`.

use glam::Vec2;

use super::state::{Agent, Ball};
use crate::consts::*;

/// Linear prediction of the ball's position
pub fn aim_point(ball: &Ball) -> Vec2 {
    ball.pos + ball.vel * AI_LOOKAHEAD
}

/// Move the agent one tick toward its aim point.
///
/// Inside the dead zone (including exactly on target) the agent holds still.
pub fn steer(agent: &mut Agent, ball: &Ball) {
    let to_target = aim_point(ball) - agent.pos;
    let dist = to_target.length();

    if dist > AI_DEAD_ZONE {
        let step = to_target / dist * AI_SPEED;
        agent.pos += step;
        agent.vel = step;
    } else {
        agent.vel = Vec2::ZERO;
    }
}
