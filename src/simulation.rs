//! Match lifecycle
//!
//! `Simulation` owns the configuration, the match state, the held keys and
//! the clock. It is the only writer of `MatchState`; renderers borrow it
//! through [`Simulation::state`] or take a [`MatchSnapshot`] copy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTicks, SimulationClock};
use crate::config::MatchConfig;
use crate::error::{SimError, SimResult};
use crate::format_match_clock;
use crate::sim::{InputState, Key, MatchSnapshot, MatchState, Side, TickOutcome, tick};

/// Where a match is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Created, waiting for kickoff
    Ready,
    Running,
    Paused,
    /// Quit or abandoned; state is final
    Finished,
}

/// A single match from kickoff to quit
#[derive(Debug, Clone)]
pub struct Simulation {
    config: MatchConfig,
    state: MatchState,
    input: InputState,
    clock: SimulationClock,
    lifecycle: Lifecycle,
}

impl Simulation {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            state: MatchState::new(),
            input: InputState::new(),
            clock: SimulationClock::new(),
            lifecycle: Lifecycle::Ready,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Read-only view of the live state
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.snapshot()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.config.home_team.name,
            Side::Away => &self.config.away_team.name,
        }
    }

    /// Kick off
    pub fn start(&mut self) -> SimResult<()> {
        match self.lifecycle {
            Lifecycle::Ready => {
                self.lifecycle = Lifecycle::Running;
                log::info!(
                    "Kickoff: {} vs {} ({})",
                    self.config.home_team.name,
                    self.config.away_team.name,
                    self.config.mode.as_str()
                );
                Ok(())
            }
            Lifecycle::Finished => Err(SimError::Finished),
            Lifecycle::Running | Lifecycle::Paused => Err(SimError::AlreadyStarted),
        }
    }

    /// Error unless the match is running or paused
    fn ensure_live(&self) -> SimResult<()> {
        match self.lifecycle {
            Lifecycle::Running | Lifecycle::Paused => Ok(()),
            Lifecycle::Ready => Err(SimError::NotStarted),
            Lifecycle::Finished => Err(SimError::Finished),
        }
    }

    /// Run one high-rate tick. A paused match is left untouched.
    pub fn tick(&mut self) -> SimResult<TickOutcome> {
        self.ensure_live()?;
        let outcome = tick(&mut self.state, &self.input, self.config.mode);
        if let Some(side) = outcome.goal {
            log::info!(
                "GOAL for {} at {} - {} {}-{} {}",
                self.team_name(side),
                format_match_clock(self.state.elapsed_seconds),
                self.config.home_team.short_name,
                self.state.score.home,
                self.state.score.away,
                self.config.away_team.short_name,
            );
        }
        Ok(outcome)
    }

    /// Run one low-rate tick: one more second on the match clock
    pub fn tick_second(&mut self) -> SimResult<()> {
        self.ensure_live()?;
        if !self.state.paused {
            self.state.elapsed_seconds += 1;
        }
        Ok(())
    }

    /// Feed a frame's wall-clock delta and run every tick that falls due.
    /// Paused time is not banked.
    pub fn advance(&mut self, frame: Duration) -> SimResult<ClockTicks> {
        self.ensure_live()?;
        if self.state.paused {
            return Ok(ClockTicks::default());
        }

        let due = self.clock.advance(frame);
        for _ in 0..due.physics {
            self.tick()?;
        }
        for _ in 0..due.seconds {
            self.tick_second()?;
        }
        Ok(due)
    }

    pub fn pause(&mut self) -> SimResult<()> {
        if self.lifecycle != Lifecycle::Running {
            return Err(SimError::NotRunning(self.lifecycle));
        }
        self.lifecycle = Lifecycle::Paused;
        self.state.paused = true;
        log::info!("Paused at {}", format_match_clock(self.state.elapsed_seconds));
        Ok(())
    }

    pub fn resume(&mut self) -> SimResult<()> {
        if self.lifecycle != Lifecycle::Paused {
            return Err(SimError::NotPaused(self.lifecycle));
        }
        self.lifecycle = Lifecycle::Running;
        self.state.paused = false;
        self.clock.reset();
        log::info!("Resumed at {}", format_match_clock(self.state.elapsed_seconds));
        Ok(())
    }

    /// Pause a running match or resume a paused one
    pub fn toggle_pause(&mut self) -> SimResult<()> {
        match self.lifecycle {
            Lifecycle::Running => self.pause(),
            Lifecycle::Paused => self.resume(),
            other => Err(SimError::NotRunning(other)),
        }
    }

    /// End the match. Held keys are dropped and no further ticks run.
    pub fn quit(&mut self) -> SimResult<MatchSnapshot> {
        self.ensure_live()?;
        self.lifecycle = Lifecycle::Finished;
        self.input.clear();
        self.clock.reset();
        log::info!(
            "Full time: {} {}-{} {} after {}",
            self.config.home_team.short_name,
            self.state.score.home,
            self.state.score.away,
            self.config.away_team.short_name,
            format_match_clock(self.state.elapsed_seconds)
        );
        Ok(self.snapshot())
    }

    pub fn press(&mut self, key: Key) {
        if self.lifecycle != Lifecycle::Finished {
            self.input.press(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        if self.lifecycle != Lifecycle::Finished {
            self.input.release(key);
        }
    }

    /// Press by physical key code; unmapped codes are ignored
    pub fn press_code(&mut self, code: &str) {
        if self.lifecycle != Lifecycle::Finished {
            self.input.press_code(code);
        }
    }

    /// Release by physical key code; unmapped codes are ignored
    pub fn release_code(&mut self, code: &str) {
        if self.lifecycle != Lifecycle::Finished {
            self.input.release_code(code);
        }
    }
}
