//! Game settings and preferences
//!
//! Persisted as JSON next to the binary; any load failure falls back to
//! defaults so the game always starts.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};
use crate::consts;
use crate::sim::GameConfig;

/// Default settings file name
pub const SETTINGS_FILE: &str = "strip-pong.json";

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Global brightness (0.0 - 1.0)
    pub brightness: f32,

    // === Palette ===
    pub left_color: Rgb,
    pub right_color: Rgb,
    pub ball_color: Rgb,
    pub dead_color: Rgb,

    // === Cadence ===
    /// Outer loop interval in ms (input sampling + rendering)
    pub tick_ms: u64,
    /// Ball physics step interval in ms
    pub ball_step_ms: u64,

    /// How long a terminal key press counts as "held", in ms
    pub key_hold_ms: u64,
    /// Play the walking-pixel self-test at startup
    pub startup_test: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            left_color: color::GREEN,
            right_color: color::BLUE,
            ball_color: color::WHITE,
            dead_color: color::DEAD,
            tick_ms: consts::TICK_MS,
            ball_step_ms: consts::BALL_STEP_MS,
            key_hold_ms: 150,
            startup_test: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, defaulting on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed settings file: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }

    /// Apply the palette and cadence to a game config
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            ball_step_ms: self.ball_step_ms,
            left_color: self.left_color,
            right_color: self.right_color,
            ball_color: self.ball_color,
            dead_color: self.dead_color,
            ..GameConfig::default()
        }
    }
}
