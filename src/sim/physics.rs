//! Ball integration and collision
//!
//! One call advances the ball by one physics step. The caller owns the rate
//! gate; this module only knows about positions, paddles and buttons.

use crate::consts::PADDLE_BOUNCE_EPSILON;
use crate::sim::input::InputSnapshot;
use crate::sim::state::{Ball, BallDirection, GameConfig, Player, Side};

/// Outcome of one physics step. At most one event fires per step; the wall
/// test runs first, so a wall-out suppresses any paddle check on the same
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    None,
    /// Ball crossed past this side's boundary; scores for the opponent
    WallOut(Side),
    /// Ball was returned by this side's paddle
    PaddleHit(Side),
}

/// Advance the ball one step: integrate position, then test wall-out, then
/// paddle contact.
pub fn advance(
    ball: &mut Ball,
    players: &[Player; 2],
    input: &InputSnapshot,
    cfg: &GameConfig,
) -> BallEvent {
    let receiving = match ball.direction {
        BallDirection::Left => Side::Left,
        BallDirection::Right => Side::Right,
        BallDirection::Stopped => return BallEvent::None,
    };

    match receiving {
        Side::Left => ball.position -= ball.speed,
        Side::Right => ball.position += ball.speed,
    }

    // Wall test first: strictly below 0 on the left, at or beyond N-1 on
    // the right.
    let right_wall = (cfg.track_len - 1) as f32;
    if ball.position < 0.0 {
        return BallEvent::WallOut(Side::Left);
    }
    if ball.position >= right_wall {
        return BallEvent::WallOut(Side::Right);
    }

    // Paddle contact needs all three in the same step: discretized index in
    // the receiving paddle's range, travel toward that paddle (implied by
    // `receiving`), and that side's button held at sampling time.
    let paddle = players[receiving.index()].paddle;
    let cell = ball.cell();
    if cell >= 0 && paddle.contains(cell as usize) && input.held(receiving) {
        ball.direction = match receiving {
            Side::Left => BallDirection::Right,
            Side::Right => BallDirection::Left,
        };
        // Land just outside the paddle's inner boundary so the same hit
        // cannot re-trigger.
        ball.position = match receiving {
            Side::Left => paddle.end as f32 + PADDLE_BOUNCE_EPSILON,
            Side::Right => paddle.start as f32 - PADDLE_BOUNCE_EPSILON,
        };
        ball.speed = (ball.speed + cfg.speed_increment).min(cfg.max_speed);
        log::debug!("paddle hit on {receiving:?}, speed now {}", ball.speed);
        return BallEvent::PaddleHit(receiving);
    }

    BallEvent::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{ButtonState, InputSnapshot};
    use crate::sim::state::MatchState;

    fn setup() -> (MatchState, InputSnapshot) {
        let state = MatchState::new(GameConfig::default(), 1);
        (state, InputSnapshot::idle())
    }

    fn holding(side: Side) -> InputSnapshot {
        let mut snap = InputSnapshot::idle();
        snap.buttons[side.index()] = ButtonState {
            held: true,
            just_pressed: false,
        };
        snap
    }

    #[test]
    fn test_stopped_ball_does_not_move() {
        let (state, input) = setup();
        let mut ball = Ball {
            position: 10.0,
            direction: BallDirection::Stopped,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &input, &state.config);
        assert_eq!(event, BallEvent::None);
        assert_eq!(ball.position, 10.0);
    }

    #[test]
    fn test_ball_moves_by_speed_each_step() {
        let (state, input) = setup();
        let mut ball = Ball {
            position: 20.0,
            direction: BallDirection::Right,
            speed: 1.5,
        };
        advance(&mut ball, &state.players, &input, &state.config);
        assert_eq!(ball.position, 21.5);
    }

    #[test]
    fn test_wall_out_left_when_position_goes_negative() {
        let (state, input) = setup();
        let mut ball = Ball {
            position: 0.5,
            direction: BallDirection::Left,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &input, &state.config);
        assert_eq!(event, BallEvent::WallOut(Side::Left));
    }

    #[test]
    fn test_wall_out_right_at_last_cell() {
        let (state, input) = setup();
        let last = (state.config.track_len - 1) as f32;
        let mut ball = Ball {
            position: last - 0.5,
            direction: BallDirection::Right,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &input, &state.config);
        assert_eq!(event, BallEvent::WallOut(Side::Right));
    }

    #[test]
    fn test_ball_passes_through_paddle_when_button_up() {
        let (state, input) = setup();
        let paddle = state.player(Side::Left).paddle;
        let mut ball = Ball {
            position: (paddle.end + 1) as f32,
            direction: BallDirection::Left,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &input, &state.config);
        assert_eq!(event, BallEvent::None, "unheld paddle misses the ball");
        assert_eq!(ball.position, paddle.end as f32);
        assert_eq!(ball.direction, BallDirection::Left, "ball keeps going");
    }

    #[test]
    fn test_held_paddle_returns_the_ball() {
        let (state, _) = setup();
        let paddle = state.player(Side::Left).paddle;
        let mut ball = Ball {
            position: (paddle.end + 1) as f32,
            direction: BallDirection::Left,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &holding(Side::Left), &state.config);
        assert_eq!(event, BallEvent::PaddleHit(Side::Left));
        assert_eq!(ball.direction, BallDirection::Right);
        assert!(
            ball.position > paddle.end as f32,
            "ball nudged outside the paddle"
        );
        assert!(
            !paddle.contains(ball.cell() as usize),
            "nudged cell is outside the paddle, hit cannot re-trigger"
        );
    }

    #[test]
    fn test_right_paddle_nudge_lands_outside_the_paddle() {
        let (state, _) = setup();
        let paddle = state.player(Side::Right).paddle;
        let mut ball = Ball {
            position: (paddle.start - 1) as f32,
            direction: BallDirection::Right,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &holding(Side::Right), &state.config);
        assert_eq!(event, BallEvent::PaddleHit(Side::Right));
        assert!(ball.position < paddle.start as f32);
        assert!(
            !paddle.contains(ball.cell() as usize),
            "round-to-nearest must not land back inside the paddle"
        );
    }

    #[test]
    fn test_hit_increases_speed_and_clamps_at_max() {
        let (state, _) = setup();
        let cfg = &state.config;
        let paddle = state.player(Side::Right).paddle;

        let mut ball = Ball {
            position: (paddle.start - 1) as f32,
            direction: BallDirection::Right,
            speed: cfg.initial_speed,
        };
        advance(&mut ball, &state.players, &holding(Side::Right), cfg);
        assert_eq!(ball.speed, cfg.initial_speed + cfg.speed_increment);

        let mut fast = Ball {
            position: (paddle.start - 1) as f32,
            direction: BallDirection::Right,
            speed: cfg.max_speed - 0.1,
        };
        advance(&mut fast, &state.players, &holding(Side::Right), cfg);
        assert_eq!(fast.speed, cfg.max_speed, "speed clamps at the cap");
    }

    #[test]
    fn test_held_opposite_button_does_not_catch() {
        let (state, _) = setup();
        let paddle = state.player(Side::Left).paddle;
        let mut ball = Ball {
            position: (paddle.end + 1) as f32,
            direction: BallDirection::Left,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &holding(Side::Right), &state.config);
        assert_eq!(event, BallEvent::None);
    }

    #[test]
    fn test_wall_out_wins_over_paddle_in_same_step() {
        let (state, _) = setup();
        let last = (state.config.track_len - 1) as f32;
        // Lands exactly on N-1, which is inside the right paddle's range,
        // with the right button held. The wall test runs first.
        let mut ball = Ball {
            position: last - 1.0,
            direction: BallDirection::Right,
            speed: 1.0,
        };
        let event = advance(&mut ball, &state.players, &holding(Side::Right), &state.config);
        assert_eq!(
            event,
            BallEvent::WallOut(Side::Right),
            "events are mutually exclusive; wall before paddle"
        );
    }

    #[test]
    fn test_fast_ball_can_skip_the_paddle_window() {
        let (state, _) = setup();
        // A max-speed ball jumping from outside the paddle straight past
        // N-1 is a wall-out even with the button held.
        let mut ball = Ball {
            position: (state.config.track_len - 1) as f32 - state.config.max_speed + 0.5,
            direction: BallDirection::Right,
            speed: state.config.max_speed,
        };
        let event = advance(&mut ball, &state.players, &holding(Side::Right), &state.config);
        assert_eq!(event, BallEvent::WallOut(Side::Right));
    }
}
