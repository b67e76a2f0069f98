//! Terminal strip sink
//!
//! Draws the strip as one row of colored blocks, overwriting in place so
//! the terminal behaves like a fixed LED array.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::color::Rgb;
use crate::display::DisplaySink;

/// Renders the strip on stdout with 24-bit colors
pub struct TerminalStrip {
    out: Stdout,
    /// Global brightness factor applied to every pixel
    brightness: f32,
}

impl TerminalStrip {
    pub fn new(brightness: f32) -> Self {
        Self {
            out: io::stdout(),
            brightness: brightness.clamp(0.0, 1.0),
        }
    }
}

impl DisplaySink for TerminalStrip {
    fn write(&mut self, pixels: &[(usize, Rgb)]) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0))?;
        for (_, color) in pixels {
            let c = color.scaled(self.brightness);
            queue!(
                self.out,
                SetForegroundColor(Color::Rgb {
                    r: c.r,
                    g: c.g,
                    b: c.b
                }),
                Print("█")
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}
