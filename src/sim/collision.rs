//! Agent-ball contact
//!
//! Any touch is a full kick: the ball is pushed clear of the agent and its
//! velocity is overwritten with `KICK_POWER` along the contact normal.
//! Momentum is not conserved.

use glam::Vec2;

use super::state::{Agent, Ball};
use crate::consts::*;

/// Result of a circle-circle overlap test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Unit normal from the first circle's centre toward the second's
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub penetration: f32,
}

/// Check overlap between two circles.
///
/// Returns `None` when they do not overlap, and also when the centres
/// coincide, since no push direction can be derived then.
pub fn circle_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> Option<CollisionResult> {
    let offset = b - a;
    let dist = offset.length();
    let reach = a_radius + b_radius;

    if dist >= reach || dist <= f32::EPSILON {
        return None;
    }

    Some(CollisionResult {
        normal: offset / dist,
        penetration: reach - dist,
    })
}

/// Resolve contact between one agent and the ball.
///
/// Returns the contact if the agent kicked the ball this tick.
pub fn resolve_kick(agent: &Agent, ball: &mut Ball) -> Option<CollisionResult> {
    let hit = circle_overlap(agent.pos, PLAYER_RADIUS, ball.pos, BALL_RADIUS)?;
    ball.pos += hit.normal * hit.penetration;
    ball.vel = hit.normal * KICK_POWER;
    Some(hit)
}
