//! Render projection
//!
//! Pure function from match state to the pixel list the display sink
//! consumes. Read-only over the engine state; no physics here.

use crate::color::{self, Rgb};
use crate::consts::BLINK_PERIOD_MS;
use crate::sim::state::{MatchPhase, MatchState, Side};

/// Project the current state onto the strip: one `(index, color)` pair per
/// track cell, in index order.
///
/// Life cells are always exactly `max_lives` per player (active in the
/// player color, lost in the dead color) so the layout never shifts. The
/// ball renders only while its position is defined (WaitServe/Playing) and
/// blinks during WaitServe on `now_ms / 250` parity. Out-of-range writes
/// are dropped, never propagated.
pub fn project(state: &MatchState, now_ms: u64) -> Vec<(usize, Rgb)> {
    let n = state.config.track_len;
    let mut strip = vec![color::BLACK; n];

    for player in &state.players {
        for i in 0..state.config.max_lives as usize {
            let index = match player.side {
                Side::Left => i,
                Side::Right => match n.checked_sub(1 + i) {
                    Some(index) => index,
                    None => continue,
                },
            };
            let cell_color = if i < player.lives as usize {
                player.color
            } else {
                state.config.dead_color
            };
            if let Some(px) = strip.get_mut(index) {
                *px = cell_color;
            }
        }
    }

    let ball_visible = match state.phase {
        MatchPhase::Playing => true,
        MatchPhase::WaitServe => (now_ms / BLINK_PERIOD_MS) % 2 == 0,
        MatchPhase::Init | MatchPhase::PointScored | MatchPhase::GameOver => false,
    };
    if ball_visible {
        let cell = state.ball.cell();
        if cell >= 0 {
            if let Some(px) = strip.get_mut(cell as usize) {
                *px = state.config.ball_color;
            }
        }
    }

    strip.into_iter().enumerate().collect()
}
