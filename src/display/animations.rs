//! Attract and diagnostic light animations
//!
//! Each animation is a pure per-step frame function; the driver loop plays
//! frames at its own cadence and stays responsive between them.

use crate::color::{self, Rgb};

/// Width of the game-over sweep light
pub const SWEEP_WIDTH: usize = 5;
/// Suggested delay between sweep frames
pub const SWEEP_FRAME_MS: u64 = 70;
/// Suggested delay between self-test frames
pub const TEST_FRAME_MS: u64 = 50;

/// One full left-right-left sweep cycle in frames
pub fn sweep_cycle_len(len: usize) -> usize {
    (2 * len.saturating_sub(SWEEP_WIDTH)).max(1)
}

/// Bouncing red light ("knight rider"), one frame per step. The light
/// reverses at the strip ends; cells outside the strip are clipped.
pub fn sweep_frame(step: usize, len: usize) -> Vec<(usize, Rgb)> {
    let mut strip = vec![color::BLACK; len];
    if len > 0 {
        let span = len.saturating_sub(SWEEP_WIDTH);
        let phase = if span == 0 { 0 } else { step % (2 * span) };
        let head = if phase <= span { phase } else { 2 * span - phase };
        for i in head..(head + SWEEP_WIDTH) {
            if let Some(px) = strip.get_mut(i) {
                *px = color::RED;
            }
        }
    }
    strip.into_iter().enumerate().collect()
}

/// Power-on self-test: a single white pixel walking the whole strip once.
/// Returns `None` once every cell has been visited.
pub fn test_frame(step: usize, len: usize) -> Option<Vec<(usize, Rgb)>> {
    if step >= len {
        return None;
    }
    let mut strip = vec![color::BLACK; len];
    strip[step] = color::WHITE;
    Some(strip.into_iter().enumerate().collect())
}
