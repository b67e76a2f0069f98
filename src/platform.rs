//! Clock and input abstraction
//!
//! The engine consumes plain values (`now_ms`, button levels); these traits
//! are the seam where real hardware, the terminal driver, or test doubles
//! plug in.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Monotonic millisecond counter
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock-independent clock based on `Instant`
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Produces the two raw button levels once per tick
pub trait InputSource {
    fn levels(&mut self, now_ms: u64) -> [bool; 2];
}

/// Converts discrete key presses into held levels.
///
/// Terminals report key *presses* (with auto-repeat) but no release events,
/// so a press is treated as holding the button for a fixed window; repeats
/// keep extending it. Real momentary switches supply levels directly and
/// skip this adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldWindow {
    window_ms: u64,
    last_press: [Option<u64>; 2],
}

impl HoldWindow {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_press: [None; 2],
        }
    }

    /// Record a press of the given button
    pub fn press(&mut self, button: usize, now_ms: u64) {
        if let Some(slot) = self.last_press.get_mut(button) {
            *slot = Some(now_ms);
        }
    }

    /// Current levels: held while within the window of the last press
    pub fn levels(&self, now_ms: u64) -> [bool; 2] {
        self.last_press
            .map(|press| press.is_some_and(|t| now_ms.saturating_sub(t) <= self.window_ms))
    }
}

/// Keyboard-driven button pair for the terminal build.
///
/// `a` is the left button, `l` the right one; `q` or Esc requests a quit.
/// Key presses are widened into levels by a [`HoldWindow`].
pub struct TerminalButtons {
    hold: HoldWindow,
    quit: bool,
}

impl TerminalButtons {
    pub const LEFT_KEY: char = 'a';
    pub const RIGHT_KEY: char = 'l';

    pub fn new(hold_window_ms: u64) -> Self {
        Self {
            hold: HoldWindow::new(hold_window_ms),
            quit: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drain all pending key events without blocking
    fn drain(&mut self, now_ms: u64) -> std::io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Char(Self::LEFT_KEY) => self.hold.press(0, now_ms),
                KeyCode::Char(Self::RIGHT_KEY) => self.hold.press(1, now_ms),
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            }
        }
        Ok(())
    }
}

impl InputSource for TerminalButtons {
    fn levels(&mut self, now_ms: u64) -> [bool; 2] {
        if let Err(err) = self.drain(now_ms) {
            log::warn!("failed to read key events: {err}");
        }
        self.hold.levels(now_ms)
    }
}
