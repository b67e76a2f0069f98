//! Strip Pong - one-dimensional Pong on a strip of addressable lights
//!
//! Core modules:
//! - `sim`: Deterministic simulation (match state machine, ball physics, render projection)
//! - `display`: Display sinks and light animations
//! - `platform`: Clock and input-source abstraction
//! - `settings`: User preferences (palette, brightness, cadence)

pub mod color;
pub mod display;
pub mod platform;
pub mod settings;
pub mod sim;

pub use color::Rgb;
pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Number of lights on the strip (track length N)
    pub const NUM_LEDS: usize = 54;
    /// Lives each player starts a match with
    pub const MAX_LIVES: u8 = 5;
    /// Width of each paddle in track cells
    pub const PADDLE_SIZE: usize = 5;

    /// Ball speed at each serve, in cells per physics step
    pub const INITIAL_SPEED: f32 = 1.0;
    /// Speed gained on every paddle hit
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Hard cap on ball speed
    pub const MAX_SPEED: f32 = 4.0;

    /// Minimum elapsed time between ball physics steps
    pub const BALL_STEP_MS: u64 = 200;
    /// Outer loop cadence (input sampling + rendering)
    pub const TICK_MS: u64 = 40;
    /// Serve-ball blink half-period in WaitServe
    pub const BLINK_PERIOD_MS: u64 = 250;

    /// How far outside the paddle boundary the ball lands after a hit.
    /// Just over half a cell, so the rounded cell is never inside the paddle.
    pub const PADDLE_BOUNCE_EPSILON: f32 = 0.6;
}
