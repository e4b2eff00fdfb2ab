//! Kickabout headless runner
//!
//! Plays a match in simulated time. Seeded autopilots hold the human keys,
//! the CPU takes the away side in pve mode, and the final snapshot is
//! printed as JSON.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use kickabout::consts::PHYSICS_PERIOD;
use kickabout::sim::{Direction, Key, Side};
use kickabout::{ConfigError, GameMode, MatchConfig, Simulation, format_match_clock};

/// Play a headless kickabout match and print the final snapshot
#[derive(Parser, Debug)]
#[command(name = "kickabout")]
#[command(about = "Headless two-player soccer match", long_about = None)]
struct Options {
    /// Match config JSON file (overrides --home, --away and --mode)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Home team id
    #[arg(long, default_value = "madrid")]
    home: String,

    /// Away team id
    #[arg(long, default_value = "barca")]
    away: String,

    /// Game mode (pve or pvp)
    #[arg(long, default_value = "pve", value_parser = parse_mode)]
    mode: GameMode,

    /// Shorthand for --mode pvp
    #[arg(long, conflicts_with = "mode")]
    pvp: bool,

    /// Match length in match seconds
    #[arg(long, default_value_t = 90)]
    seconds: u32,

    /// Autopilot RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

impl Options {
    fn mode(&self) -> GameMode {
        if self.pvp { GameMode::Pvp } else { self.mode }
    }
}

fn parse_mode(s: &str) -> Result<GameMode, ConfigError> {
    GameMode::from_str(s).ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
}

/// Holds movement keys for one human side, mostly chasing the ball
struct Autopilot {
    side: Side,
    rng: Pcg32,
    held: Vec<Direction>,
    hold_ticks: u32,
}

impl Autopilot {
    fn new(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: Pcg32::seed_from_u64(seed),
            held: Vec::with_capacity(2),
            hold_ticks: 0,
        }
    }

    /// Called once per frame, before the clock is advanced
    fn drive(&mut self, sim: &mut Simulation) {
        if self.hold_ticks > 0 {
            self.hold_ticks -= 1;
            return;
        }

        for direction in self.held.drain(..) {
            sim.release(Key::new(self.side, direction));
        }

        let snapshot = sim.snapshot();
        let me = match self.side {
            Side::Home => snapshot.home_position,
            Side::Away => snapshot.away_position,
        };
        let to_ball = snapshot.ball_position - me;

        if self.rng.random_bool(0.75) {
            if to_ball.x.abs() > 4.0 {
                self.held.push(if to_ball.x > 0.0 { Direction::Right } else { Direction::Left });
            }
            if to_ball.y.abs() > 4.0 {
                self.held.push(if to_ball.y > 0.0 { Direction::Down } else { Direction::Up });
            }
        } else {
            let pick = self.rng.random_range(0..Direction::ALL.len());
            self.held.push(Direction::ALL[pick]);
        }

        for &direction in &self.held {
            sim.press(Key::new(self.side, direction));
        }
        self.hold_ticks = self.rng.random_range(2..20);
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = match &options.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::new(&options.home, &options.away, options.mode())?,
    };
    log::info!(
        "{} ({}) vs {} ({}), {} seconds, seed {}",
        config.home_team.name,
        config.home_team.short_name,
        config.away_team.name,
        config.away_team.short_name,
        options.seconds,
        options.seed
    );

    let mut pilots = vec![Autopilot::new(Side::Home, options.seed)];
    if !config.mode.away_is_cpu() {
        pilots.push(Autopilot::new(Side::Away, options.seed.wrapping_add(1)));
    }

    let mut sim = Simulation::new(config);
    sim.start()?;

    while sim.state().elapsed_seconds < options.seconds {
        for pilot in &mut pilots {
            pilot.drive(&mut sim);
        }
        let due = sim.advance(PHYSICS_PERIOD)?;
        let elapsed = sim.state().elapsed_seconds;
        if due.seconds > 0 && elapsed % 10 == 0 {
            let score = sim.state().score;
            log::info!("{} {}-{}", format_match_clock(elapsed), score.home, score.away);
        }
    }

    let last = sim.quit()?;
    let config = sim.config();
    println!(
        "{} {} - {} {}  {}",
        config.home_team.short_name,
        last.score.home,
        last.score.away,
        config.away_team.short_name,
        format_match_clock(last.elapsed_seconds)
    );
    println!("{}", serde_json::to_string_pretty(&last)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Kickabout (headless) starting...");

    let options = Options::parse();
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
