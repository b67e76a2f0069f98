//! The match state machine
//!
//! One call per outer tick. Every transition is an explicit, total step of
//! `(phase, input, clock) -> phase`; entry actions run at transition time
//! and no phase ever blocks the loop.

use crate::sim::input::InputSnapshot;
use crate::sim::physics::{self, BallEvent};
use crate::sim::state::{BallDirection, MatchPhase, MatchState, Side};

/// Advance the match by one tick. `now_ms` is a monotonic millisecond
/// reading; it feeds only the ball-physics rate gate.
pub fn tick(state: &mut MatchState, input: &InputSnapshot, now_ms: u64) {
    match state.phase {
        MatchPhase::Init => {
            state.place_serve_ball();
            state.phase = MatchPhase::WaitServe;
        }

        MatchPhase::WaitServe => {
            // Edge, not level: a button still held from earlier must not
            // serve by itself.
            if input.just_pressed(state.serve_owner) {
                state.ball.direction = match state.serve_owner {
                    Side::Left => BallDirection::Right,
                    Side::Right => BallDirection::Left,
                };
                state.last_ball_step_ms = now_ms;
                state.phase = MatchPhase::Playing;
                log::info!("{:?} serves", state.serve_owner);
            }
        }

        MatchPhase::Playing => {
            // Physics runs slower than the outer loop. The gate compares
            // elapsed time and jumps the timestamp to now, so missed
            // intervals are skipped, never queued.
            if now_ms.saturating_sub(state.last_ball_step_ms) >= state.config.ball_step_ms {
                state.last_ball_step_ms = now_ms;
                let event =
                    physics::advance(&mut state.ball, &state.players, input, &state.config);
                if let BallEvent::WallOut(side) = event {
                    state.score_against(side);
                    state.phase = MatchPhase::PointScored;
                }
            }
        }

        MatchPhase::PointScored => {
            // Lives were decremented on entry; the game-over check comes
            // before any further mutation.
            if state.has_loser() {
                state.phase = MatchPhase::GameOver;
                log::info!("game over");
            } else {
                state.place_serve_ball();
                state.phase = MatchPhase::WaitServe;
            }
        }

        MatchPhase::GameOver => {
            if input.any_just_pressed() {
                state.start_match();
                state.phase = MatchPhase::Init;
            }
        }
    }
}
