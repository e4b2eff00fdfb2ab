//! Pitch geometry queries
//!
//! The pitch is an axis-aligned rectangle in screen coordinates with the
//! origin at the top-left corner. Bodies stay inside the touchlines, which
//! sit `PITCH_MARGIN` in from each edge. The only openings are the goal
//! mouths on the left and right edges.

use glam::Vec2;

use super::state::Side;
use crate::consts::*;

/// Axis-aligned range a body's centre may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Usable centre range for a body of the given radius:
    /// `[margin + radius, size - margin - radius]` on each axis
    pub fn for_radius(radius: f32) -> Self {
        let inset = PITCH_MARGIN + radius;
        Self {
            min: Vec2::splat(inset),
            max: Vec2::new(PITCH_WIDTH - inset, PITCH_HEIGHT - inset),
        }
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.min, self.max)
    }
}

/// Centre of the pitch
pub fn center() -> Vec2 {
    Vec2::new(PITCH_WIDTH / 2.0, PITCH_HEIGHT / 2.0)
}

/// Whether a y coordinate lies strictly inside the goal mouth span
pub fn in_goal_mouth(y: f32) -> bool {
    let half = GOAL_WIDTH / 2.0;
    let mid = PITCH_HEIGHT / 2.0;
    y > mid - half && y < mid + half
}

/// The goal a position has reached, if any. The left goal is defended by
/// home, the right by away.
pub fn goal_reached(pos: Vec2) -> Option<Side> {
    if !in_goal_mouth(pos.y) {
        return None;
    }
    if pos.x <= GOAL_LINE_DEPTH {
        Some(Side::Home)
    } else if pos.x >= PITCH_WIDTH - GOAL_LINE_DEPTH {
        Some(Side::Away)
    } else {
        None
    }
}

/// Kickoff spot for an agent
pub fn kickoff_spot(side: Side) -> Vec2 {
    match side {
        Side::Home => Vec2::new(KICKOFF_OFFSET, PITCH_HEIGHT / 2.0),
        Side::Away => Vec2::new(PITCH_WIDTH - KICKOFF_OFFSET, PITCH_HEIGHT / 2.0),
    }
}
