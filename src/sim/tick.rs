//! Fixed-step simulation tick
//!
//! Stage order is fixed: input-driven agent steps, ball integration,
//! boundaries, collisions, goal detection.

use super::state::{MatchState, Side};
use super::{InputState, ai, collision, physics, score};
use crate::config::GameMode;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Last agent to kick the ball this tick (away wins a simultaneous touch)
    pub kicked_by: Option<Side>,
    /// Side credited with a goal this tick
    pub goal: Option<Side>,
    /// Ball came off a touchline this tick
    pub bounced: bool,
}

/// Advance the match by one physics tick. A paused state is left untouched.
pub fn tick(state: &mut MatchState, input: &InputState, mode: GameMode) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.paused {
        return outcome;
    }

    state.time_ticks += 1;

    physics::step_agent(&mut state.home, input, Side::Home);
    match mode {
        GameMode::Pvp => physics::step_agent(&mut state.away, input, Side::Away),
        GameMode::Pve => ai::steer(&mut state.away, &state.ball),
    }
    physics::integrate_ball(&mut state.ball);

    physics::clamp_agent(&mut state.home);
    physics::clamp_agent(&mut state.away);
    outcome.bounced = physics::contain_ball(&mut state.ball).any();

    // Home first so an away touch in the same tick overwrites it
    for side in [Side::Home, Side::Away] {
        let agent = *state.agent(side);
        if let Some(hit) = collision::resolve_kick(&agent, &mut state.ball) {
            log::debug!(
                "{} kick at tick {} (normal {:?})",
                side.as_str(),
                state.time_ticks,
                hit.normal
            );
            outcome.kicked_by = Some(side);
        }
    }
    if outcome.kicked_by.is_some() {
        // A kick from against a touchline must not push the ball off the pitch
        outcome.bounced |= physics::contain_ball(&mut state.ball).any();
    }

    outcome.goal = score::check_goal(state);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::input::{Direction, Key};
    use crate::sim::pitch::{self, Bounds};
    use crate::sim::state::{Agent, Ball, Score};
    use glam::Vec2;
    use proptest::prelude::*;

    const ALL_KEYS: [Key; 8] = [
        Key::new(Side::Home, Direction::Up),
        Key::new(Side::Home, Direction::Down),
        Key::new(Side::Home, Direction::Left),
        Key::new(Side::Home, Direction::Right),
        Key::new(Side::Away, Direction::Up),
        Key::new(Side::Away, Direction::Down),
        Key::new(Side::Away, Direction::Left),
        Key::new(Side::Away, Direction::Right),
    ];

    fn input_from_bits(bits: u8) -> InputState {
        let mut input = InputState::new();
        for (i, key) in ALL_KEYS.iter().enumerate() {
            if bits & (1 << i) != 0 {
                input.press(*key);
            }
        }
        input
    }

    #[test]
    fn test_walk_into_ball_kicks_it_right() {
        let mut state = MatchState::new();
        state.home.pos = Vec2::new(565.0, 400.0);
        let mut input = InputState::new();
        input.press(Key::new(Side::Home, Direction::Right));

        let outcome = tick(&mut state, &input, GameMode::Pvp);

        assert_eq!(outcome.kicked_by, Some(Side::Home));
        assert_eq!(outcome.goal, None);
        assert_eq!(state.home.pos, Vec2::new(571.0, 400.0));
        assert_eq!(state.ball.vel, Vec2::new(KICK_POWER, 0.0));
        assert_eq!(state.ball.speed(), 12.0);
        assert!(state.home.pos.distance(state.ball.pos) >= PLAYER_RADIUS + BALL_RADIUS);
    }

    #[test]
    fn test_simultaneous_touch_away_wins() {
        let mut state = MatchState::new();
        state.home.pos = Vec2::new(575.0, 400.0);
        state.away.pos = Vec2::new(625.0, 400.0);

        let outcome = tick(&mut state, &InputState::new(), GameMode::Pvp);

        assert_eq!(outcome.kicked_by, Some(Side::Away));
        assert_eq!(state.ball.vel, Vec2::new(-KICK_POWER, 0.0));
        assert_eq!(state.ball.pos, Vec2::new(595.0, 400.0));
    }

    #[test]
    fn test_free_ball_decays_geometrically() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(600.0, 150.0);
        state.ball.vel = Vec2::new(2.0, 0.5);
        let input = InputState::new();

        for _ in 0..60 {
            let before = state.ball.speed();
            let outcome = tick(&mut state, &input, GameMode::Pvp);
            assert_eq!(outcome, TickOutcome::default());
            let after = state.ball.speed();
            assert!((after - before * BALL_FRICTION).abs() < 1e-5);
        }
        assert!(state.ball.speed() > 0.0);
    }

    #[test]
    fn test_wall_bounce_through_tick() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(45.0, 200.0);
        state.ball.vel = Vec2::new(-20.0, 0.0);

        let outcome = tick(&mut state, &InputState::new(), GameMode::Pvp);

        assert!(outcome.bounced);
        assert_eq!(state.ball.pos, Vec2::new(40.0, 200.0));
        assert!(state.ball.vel.x > 0.0);
        assert!((state.ball.vel.x - 20.0 * BALL_FRICTION * 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_goal_through_left_mouth_resets_match() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(20.0, 400.0);
        state.ball.vel = Vec2::new(-6.0, 0.0);
        state.home.pos = Vec2::new(400.0, 600.0);
        state.elapsed_seconds = 33;

        let outcome = tick(&mut state, &InputState::new(), GameMode::Pve);

        assert_eq!(outcome.goal, Some(Side::Away));
        assert_eq!(state.score, Score { home: 0, away: 1 });
        assert_eq!(state.ball, Ball::at_kickoff());
        assert_eq!(state.home, Agent::at_kickoff(Side::Home));
        assert_eq!(state.away, Agent::at_kickoff(Side::Away));
        assert_eq!(state.elapsed_seconds, 33);
    }

    #[test]
    fn test_ball_crosses_touchline_inside_mouth() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(45.0, 400.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);

        let outcome = tick(&mut state, &InputState::new(), GameMode::Pvp);

        assert_eq!(outcome.goal, None);
        assert!(!outcome.bounced);
        assert_eq!(state.ball.pos, Vec2::new(35.0, 400.0));
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut state = MatchState::new();
        state.ball.vel = Vec2::new(5.0, 5.0);
        state.paused = true;
        let before = state.clone();
        let mut input = InputState::new();
        input.press(Key::new(Side::Home, Direction::Up));

        for mode in [GameMode::Pve, GameMode::Pvp] {
            for _ in 0..30 {
                assert_eq!(tick(&mut state, &input, mode), TickOutcome::default());
            }
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_pve_ignores_away_keys_and_chases_ball() {
        let mut state = MatchState::new();
        let mut input = InputState::new();
        input.press(Key::new(Side::Away, Direction::Right));

        tick(&mut state, &input, GameMode::Pve);

        assert_eq!(state.away.pos, Vec2::new(900.0 - AI_SPEED, 400.0));
    }

    #[test]
    fn test_pvp_moves_away_from_arrows() {
        let mut state = MatchState::new();
        let mut input = InputState::new();
        input.press(Key::new(Side::Away, Direction::Up));

        tick(&mut state, &input, GameMode::Pvp);

        assert_eq!(state.away.pos, Vec2::new(900.0, 400.0 - PLAYER_SPEED));
    }

    #[test]
    fn test_kick_against_wall_stays_on_pitch() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(40.0, 200.0);
        state.home.pos = Vec2::new(55.0, 200.0);
        let mut input = InputState::new();
        input.press(Key::new(Side::Home, Direction::Left));

        let outcome = tick(&mut state, &input, GameMode::Pvp);

        assert_eq!(outcome.kicked_by, Some(Side::Home));
        assert!(outcome.bounced);
        assert_eq!(state.ball.pos.x, 40.0);
        // Kicked into the wall, so it comes back off it
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_ball_pinned_by_agent_at_wall() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(40.0, 200.0);
        state.home.pos = Vec2::new(55.0, 200.0);
        let mut input = InputState::new();
        input.press(Key::new(Side::Home, Direction::Left));
        let ball_bounds = Bounds::for_radius(BALL_RADIUS);
        let rebound = KICK_POWER * -WALL_RESTITUTION;

        // Every tick the ball rolls into the agent, is kicked back into the
        // wall and bounces out at the same speed
        for _ in 0..120 {
            let outcome = tick(&mut state, &input, GameMode::Pvp);

            assert_eq!(outcome.kicked_by, Some(Side::Home));
            assert!(outcome.bounced);
            assert_eq!(outcome.goal, None);
            assert_eq!(state.home.pos, Vec2::new(50.0, 200.0));
            assert_eq!(state.ball.pos, Vec2::new(40.0, 200.0));
            assert!((state.ball.vel.x - rebound).abs() < 1e-4);
            assert_eq!(state.ball.vel.y, 0.0);
            assert!(state.ball.pos.is_finite() && state.ball.vel.is_finite());
            assert!(ball_bounds.contains(state.ball.pos));
        }
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = MatchState::new();
        let mut state2 = MatchState::new();

        let inputs = [0b0000_1000u8, 0b0000_1001, 0b0100_1000, 0, 0b1000_0010];
        for _ in 0..50 {
            for bits in inputs {
                let input = input_from_bits(bits);
                let a = tick(&mut state1, &input, GameMode::Pve);
                let b = tick(&mut state2, &input, GameMode::Pve);
                assert_eq!(a, b);
            }
        }

        assert_eq!(state1, state2);
        assert_eq!(state1.time_ticks, 250);
    }

    fn mode_strategy() -> impl Strategy<Value = GameMode> {
        prop_oneof![Just(GameMode::Pve), Just(GameMode::Pvp)]
    }

    proptest! {
        #[test]
        fn prop_bodies_stay_on_pitch(
            mode in mode_strategy(),
            vx in -40.0f32..40.0,
            vy in -40.0f32..40.0,
            script in prop::collection::vec((any::<u8>(), 1usize..20), 1..40),
        ) {
            let mut state = MatchState::new();
            state.ball.vel = Vec2::new(vx, vy);
            let agent_bounds = Bounds::for_radius(PLAYER_RADIUS);
            let ball_bounds = Bounds::for_radius(BALL_RADIUS);

            for (bits, hold) in script {
                let input = input_from_bits(bits);
                for _ in 0..hold {
                    let before = state.score;
                    let outcome = tick(&mut state, &input, mode);

                    prop_assert!(state.ball.pos.is_finite() && state.ball.vel.is_finite());
                    prop_assert!(agent_bounds.contains(state.home.pos));
                    prop_assert!(agent_bounds.contains(state.away.pos));
                    prop_assert!(state.ball.pos.y >= ball_bounds.min.y);
                    prop_assert!(state.ball.pos.y <= ball_bounds.max.y);
                    let in_x = state.ball.pos.x >= ball_bounds.min.x
                        && state.ball.pos.x <= ball_bounds.max.x;
                    prop_assert!(in_x || pitch::in_goal_mouth(state.ball.pos.y));

                    match outcome.goal {
                        Some(side) => {
                            let mut expected = before;
                            expected.credit(side);
                            prop_assert_eq!(state.score, expected);
                            prop_assert_eq!(state.ball, Ball::at_kickoff());
                            prop_assert_eq!(state.home, Agent::at_kickoff(Side::Home));
                            prop_assert_eq!(state.away, Agent::at_kickoff(Side::Away));
                        }
                        None => {
                            prop_assert_eq!(state.score, before);
                        }
                    }
                }
            }
        }
    }
}
