//! Match state and core simulation types
//!
//! The whole engine state is one owned aggregate, passed by exclusive
//! mutable reference through `tick`. No globals.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::{self, Rgb};
use crate::consts::*;

/// Which end of the track a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into two-element per-player arrays
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Ball travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallDirection {
    Left,
    Right,
    Stopped,
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Match being (re)initialized; always advances to WaitServe
    Init,
    /// Ball parked next to the serving paddle, waiting for an edge press
    WaitServe,
    /// Ball in flight
    Playing,
    /// A point was just scored; lives already decremented
    PointScored,
    /// Someone ran out of lives; waiting for a restart press
    GameOver,
}

/// Tuning for one match; fixed for the match's duration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Track length N (number of addressable cells)
    pub track_len: usize,
    /// Lives per player at match start
    pub max_lives: u8,
    /// Paddle width in cells
    pub paddle_size: usize,
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub max_speed: f32,
    /// Minimum elapsed ms between ball physics steps
    pub ball_step_ms: u64,
    pub left_color: Rgb,
    pub right_color: Rgb,
    pub ball_color: Rgb,
    pub dead_color: Rgb,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_len: NUM_LEDS,
            max_lives: MAX_LIVES,
            paddle_size: PADDLE_SIZE,
            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            max_speed: MAX_SPEED,
            ball_step_ms: BALL_STEP_MS,
            left_color: color::GREEN,
            right_color: color::BLUE,
            ball_color: color::WHITE,
            dead_color: color::DEAD,
        }
    }
}

impl GameConfig {
    /// Paddle range for a side, flush against its end of the track
    pub fn paddle(&self, side: Side) -> Paddle {
        match side {
            Side::Left => Paddle::new(0, self.paddle_size - 1),
            Side::Right => Paddle::new(self.track_len - self.paddle_size, self.track_len - 1),
        }
    }

    /// Serve position: the cell adjacent to the serving paddle
    pub fn serve_position(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_size as f32,
            Side::Right => (self.track_len - 1 - self.paddle_size) as f32,
        }
    }

    fn player_color(&self, side: Side) -> Rgb {
        match side {
            Side::Left => self.left_color,
            Side::Right => self.right_color,
        }
    }
}

/// A paddle: inclusive cell range `[start, end]`; never moves during a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub start: usize,
    pub end: usize,
}

impl Paddle {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// One of the two players
#[derive(Debug, Clone)]
pub struct Player {
    pub side: Side,
    pub lives: u8,
    pub color: Rgb,
    pub paddle: Paddle,
}

/// The ball; exists for the whole process, reinitialized at each serve
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Continuous coordinate over the track, not yet discretized
    pub position: f32,
    pub direction: BallDirection,
    pub speed: f32,
}

impl Ball {
    /// Discretized cell index (round to nearest)
    pub fn cell(&self) -> i64 {
        self.position.round() as i64
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: GameConfig,
    pub phase: MatchPhase,
    /// Indexed by `Side::index()`: [Left, Right]
    pub players: [Player; 2],
    pub ball: Ball,
    /// Side that must serve next (loser-serves policy)
    pub serve_owner: Side,
    /// Timestamp of the last ball physics step, for the rate gate
    pub last_ball_step_ms: u64,
}

impl MatchState {
    /// Create a fresh match. The first server is a seeded coin flip; every
    /// later match alternates from the previous one.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let serve_owner = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };

        let players = [
            Player {
                side: Side::Left,
                lives: config.max_lives,
                color: config.player_color(Side::Left),
                paddle: config.paddle(Side::Left),
            },
            Player {
                side: Side::Right,
                lives: config.max_lives,
                color: config.player_color(Side::Right),
                paddle: config.paddle(Side::Right),
            },
        ];

        let ball = Ball {
            position: config.serve_position(serve_owner),
            direction: BallDirection::Stopped,
            speed: config.initial_speed,
        };

        Self {
            config,
            phase: MatchPhase::Init,
            players,
            ball,
            serve_owner,
            last_ball_step_ms: 0,
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Entry action for Init: reset lives and paddles, reset ball speed,
    /// alternate the serve owner.
    pub fn start_match(&mut self) {
        for player in &mut self.players {
            player.lives = self.config.max_lives;
            player.paddle = self.config.paddle(player.side);
        }
        self.ball.speed = self.config.initial_speed;
        self.ball.direction = BallDirection::Stopped;
        self.serve_owner = self.serve_owner.opposite();
        log::info!("match start, first serve: {:?}", self.serve_owner);
    }

    /// Entry action for WaitServe: park the ball next to the serving paddle
    pub fn place_serve_ball(&mut self) {
        self.ball.position = self.config.serve_position(self.serve_owner);
        self.ball.direction = BallDirection::Stopped;
        self.ball.speed = self.config.initial_speed;
    }

    /// Entry action for PointScored: the wall side loses a life (clamped at
    /// zero) and becomes the next server.
    pub fn score_against(&mut self, loser: Side) {
        self.serve_owner = loser;
        let player = self.player_mut(loser);
        player.lives = player.lives.saturating_sub(1);
        log::info!(
            "point against {:?}, lives now {}",
            loser,
            self.player(loser).lives
        );
    }

    /// True when any player has run out of lives
    pub fn has_loser(&self) -> bool {
        self.players.iter().any(|p| p.lives == 0)
    }
}
