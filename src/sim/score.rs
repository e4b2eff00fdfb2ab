//! Goal detection and kickoff reset

use super::pitch;
use super::state::{MatchState, Side};

/// Award a goal if the ball has reached either goal, then reset all bodies
/// to kickoff. Returns the side that scored.
///
/// The reset moves the ball out of the goal zone, so one crossing can only
/// ever count once.
pub fn check_goal(state: &mut MatchState) -> Option<Side> {
    let defended = pitch::goal_reached(state.ball.pos)?;
    let scorer = defended.opponent();

    state.score.credit(scorer);
    state.reset_positions();
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Agent, Ball, Score};
    use glam::Vec2;

    #[test]
    fn test_left_goal_scores_for_away() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(15.0, 400.0);
        state.ball.vel = Vec2::new(-9.0, 1.0);
        state.home.pos = Vec2::new(80.0, 420.0);
        state.away.pos = Vec2::new(200.0, 300.0);

        assert_eq!(check_goal(&mut state), Some(Side::Away));

        assert_eq!(state.score, Score { home: 0, away: 1 });
        assert_eq!(state.ball, Ball::at_kickoff());
        assert_eq!(state.home, Agent::at_kickoff(Side::Home));
        assert_eq!(state.away, Agent::at_kickoff(Side::Away));
    }

    #[test]
    fn test_right_goal_scores_for_home() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(1190.0, 350.0);

        assert_eq!(check_goal(&mut state), Some(Side::Home));
        assert_eq!(state.score, Score { home: 1, away: 0 });
    }

    #[test]
    fn test_no_goal_wide_of_the_posts_or_short_of_the_line() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(10.0, 300.0);
        assert_eq!(check_goal(&mut state), None);

        state.ball.pos = Vec2::new(20.0, 400.0);
        assert_eq!(check_goal(&mut state), None);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.pos, Vec2::new(20.0, 400.0));
    }

    #[test]
    fn test_goal_counts_once() {
        let mut state = MatchState::new();
        state.ball.pos = Vec2::new(5.0, 400.0);

        check_goal(&mut state);
        assert_eq!(check_goal(&mut state), None);
        assert_eq!(state.score.total(), 1);
    }
}
