//! Fixed-step scheduling
//!
//! Frame deltas from the host loop are banked in two accumulators: one
//! drained in `PHYSICS_PERIOD` steps for the physics tick, one drained in
//! whole seconds for the match timer. Durations are integer nanoseconds, so
//! sixty physics periods never drift past one second.

use std::time::Duration;

use crate::consts::*;

/// Periodic actions due after a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTicks {
    /// High-rate physics ticks to run, in order
    pub physics: u32,
    /// Match-timer seconds to add
    pub seconds: u32,
}

/// Accumulator clock driving the 60 Hz and 1 Hz actions
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    physics_accumulator: Duration,
    timer_accumulator: Duration,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank one frame's worth of wall-clock time and report what is due.
    ///
    /// The physics share of a frame is capped at `MAX_FRAME`. The banked
    /// remainder is always under one period, so a single call releases at
    /// most `(MAX_FRAME + PHYSICS_PERIOD) / PHYSICS_PERIOD` ticks (7 at
    /// 60 Hz). The match timer always receives the full delta.
    pub fn advance(&mut self, frame: Duration) -> ClockTicks {
        self.physics_accumulator += frame.min(MAX_FRAME);
        self.timer_accumulator += frame;

        let mut ticks = ClockTicks::default();
        while self.physics_accumulator >= PHYSICS_PERIOD {
            self.physics_accumulator -= PHYSICS_PERIOD;
            ticks.physics += 1;
        }
        while self.timer_accumulator >= TIMER_PERIOD {
            self.timer_accumulator -= TIMER_PERIOD;
            ticks.seconds += 1;
        }
        ticks
    }

    /// Drop any partially accumulated periods
    pub fn reset(&mut self) {
        self.physics_accumulator = Duration::ZERO;
        self.timer_accumulator = Duration::ZERO;
    }
}
