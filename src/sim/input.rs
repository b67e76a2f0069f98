//! Per-tick button input
//!
//! The input provider hands the engine raw "currently held" levels once per
//! tick. Edge detection lives here, on the engine side:
//! `just_pressed = held_now && !held_previously`.
//!
//! The two semantics matter and must not be conflated: serving and
//! restarting trigger on the *edge*, while paddle collision reads the
//! *level* (a continuously held button keeps the paddle active).

use crate::sim::Side;

/// State of one logical button for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Level: button is currently held down
    pub held: bool,
    /// Edge: transitioned from released to held this tick
    pub just_pressed: bool,
}

/// Edge-detected state of both buttons for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub buttons: [ButtonState; 2],
}

impl InputSnapshot {
    /// Snapshot with neither button held
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn held(&self, side: Side) -> bool {
        self.buttons[side.index()].held
    }

    pub fn just_pressed(&self, side: Side) -> bool {
        self.buttons[side.index()].just_pressed
    }

    pub fn any_just_pressed(&self) -> bool {
        self.buttons.iter().any(|b| b.just_pressed)
    }
}

/// Derives edges from consecutive per-tick levels
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    prev: [bool; 2],
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this tick's raw levels and produce the snapshot
    pub fn sample(&mut self, levels: [bool; 2]) -> InputSnapshot {
        let mut buttons = [ButtonState::default(); 2];
        for (i, &held) in levels.iter().enumerate() {
            buttons[i] = ButtonState {
                held,
                just_pressed: held && !self.prev[i],
            };
            if buttons[i].just_pressed {
                log::debug!("button {i} pressed");
            }
        }
        self.prev = levels;
        InputSnapshot { buttons }
    }
}
