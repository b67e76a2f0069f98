//! RGB color type for the light strip
//!
//! 8 bits per channel, three channels - the only color depth the display
//! sink contract assumes.

use serde::{Deserialize, Serialize};

/// A single pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale all channels by `factor` in [0, 1]
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
        }
    }
}

/// All channels off
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
/// Ball color
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
/// Attract/game-over sweep color
pub const RED: Rgb = Rgb::new(255, 0, 0);
/// Left player default
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
/// Right player default
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
/// Lost-life cell color
pub const DEAD: Rgb = Rgb::new(40, 20, 20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_halves_channels() {
        let c = Rgb::new(200, 100, 50).scaled(0.5);
        assert_eq!(c, Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_scaled_clamps_factor() {
        assert_eq!(WHITE.scaled(2.0), WHITE, "factor above 1 should clamp");
        assert_eq!(WHITE.scaled(-1.0), BLACK, "negative factor should clamp to 0");
    }
}
