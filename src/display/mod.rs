//! Display sinks
//!
//! The engine knows nothing about hardware; it hands a pixel list to a
//! `DisplaySink` and moves on. Implement the trait to drive real LED
//! hardware; the built-in sink draws the strip in a terminal.

pub mod animations;
pub mod terminal;

use std::io;

use crate::color::Rgb;

/// Abstract strip driver
///
/// Accepts a full-strip pixel list (index, color) and presents it. No
/// assumption about flush latency or color depth beyond 8 bits per channel.
pub trait DisplaySink {
    fn write(&mut self, pixels: &[(usize, Rgb)]) -> io::Result<()>;
}

pub use terminal::TerminalStrip;
