//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timing enters only as the `now_ms` argument to `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod input;
pub mod physics;
pub mod render;
pub mod state;
pub mod tick;

pub use input::{ButtonState, EdgeDetector, InputSnapshot};
pub use physics::{BallEvent, advance};
pub use render::project;
pub use state::{Ball, BallDirection, GameConfig, MatchPhase, MatchState, Paddle, Player, Side};
pub use tick::tick;
