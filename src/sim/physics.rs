//! Per-tick kinematics and pitch boundaries
//!
//! Agents have no inertia: every tick their position moves by a fixed step
//! per held key. The ball keeps its velocity between ticks and loses a fixed
//! fraction of it to friction.

use glam::Vec2;

use super::input::InputState;
use super::pitch::{self, Bounds};
use super::state::{Agent, Ball, Side};
use crate::consts::*;

/// Move an agent one tick from the keys held for its side.
///
/// Diagonals are not normalized: two perpendicular keys move the agent
/// `PLAYER_SPEED` along both axes.
pub fn step_agent(agent: &mut Agent, input: &InputState, side: Side) {
    let delta: Vec2 = input
        .held_for(side)
        .map(|direction| direction.unit() * PLAYER_SPEED)
        .sum();
    agent.pos += delta;
    agent.vel = delta;
}

/// Advance the ball by its velocity, then apply friction
pub fn integrate_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
    ball.vel *= BALL_FRICTION;
}

/// Keep an agent inside the touchlines (no bounce)
pub fn clamp_agent(agent: &mut Agent) {
    agent.pos = Bounds::for_radius(PLAYER_RADIUS).clamp(agent.pos);
}

/// Walls the ball bounced off during containment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect the ball off any touchline it has crossed.
///
/// The X axis is handled first. Across the goal mouths the left and right
/// lines are open, so a ball there is left where it is for goal detection.
/// Everywhere else the normal velocity component is scaled by
/// `WALL_RESTITUTION` and the ball is snapped back onto the line on the side
/// of the pitch it is in.
pub fn contain_ball(ball: &mut Ball) -> Bounce {
    let bounds = Bounds::for_radius(BALL_RADIUS);
    let mut bounce = Bounce::default();

    let out_x = ball.pos.x < bounds.min.x || ball.pos.x > bounds.max.x;
    if out_x && !pitch::in_goal_mouth(ball.pos.y) {
        ball.vel.x *= WALL_RESTITUTION;
        ball.pos.x = if ball.pos.x < PITCH_WIDTH / 2.0 {
            bounds.min.x
        } else {
            bounds.max.x
        };
        bounce.x = true;
    }

    if ball.pos.y < bounds.min.y || ball.pos.y > bounds.max.y {
        ball.vel.y *= WALL_RESTITUTION;
        ball.pos.y = if ball.pos.y < PITCH_HEIGHT / 2.0 {
            bounds.min.y
        } else {
            bounds.max.y
        };
        bounce.y = true;
    }

    bounce
}
