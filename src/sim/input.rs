//! Held-key input set
//!
//! Movement is continuous: handlers only flip keys on and off, and the tick
//! samples whatever is held at that moment.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Side;

/// Movement direction of a logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// A logical movement key for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub side: Side,
    pub direction: Direction,
}

impl Key {
    pub const fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }

    /// Map a physical key code (`KeyboardEvent.code` naming) to a logical key.
    /// WASD drives the home agent, the arrow keys drive the away agent.
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "KeyW" => Key::new(Side::Home, Direction::Up),
            "KeyS" => Key::new(Side::Home, Direction::Down),
            "KeyA" => Key::new(Side::Home, Direction::Left),
            "KeyD" => Key::new(Side::Home, Direction::Right),
            "ArrowUp" => Key::new(Side::Away, Direction::Up),
            "ArrowDown" => Key::new(Side::Away, Direction::Down),
            "ArrowLeft" => Key::new(Side::Away, Direction::Left),
            "ArrowRight" => Key::new(Side::Away, Direction::Right),
            _ => return None,
        };
        Some(key)
    }

    fn bit(self) -> u8 {
        let side = match self.side {
            Side::Home => 0,
            Side::Away => 4,
        };
        let dir = match self.direction {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        };
        1 << (side + dir)
    }
}

/// Set of currently held logical keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn is_active(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// Press by physical key code; unknown codes are ignored
    pub fn press_code(&mut self, code: &str) {
        match Key::from_code(code) {
            Some(key) => self.press(key),
            None => log::trace!("Ignoring press of unmapped key {code}"),
        }
    }

    /// Release by physical key code; unknown codes are ignored
    pub fn release_code(&mut self, code: &str) {
        match Key::from_code(code) {
            Some(key) => self.release(key),
            None => log::trace!("Ignoring release of unmapped key {code}"),
        }
    }

    /// Release every key
    pub fn clear(&mut self) {
        self.held = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }

    /// Held directions for one side, in `Direction::ALL` order
    pub fn held_for(&self, side: Side) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.is_active(Key::new(side, direction)))
    }
}
