//! Strip Pong entry point
//!
//! Drives the fixed-period loop: sample buttons, step the match, project
//! the state onto the strip, sleep out the remainder of the tick.

use std::io;
use std::path::Path;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::{cursor, execute, terminal};

use strip_pong::display::{DisplaySink, TerminalStrip, animations};
use strip_pong::platform::{Clock, InputSource, MonotonicClock, TerminalButtons};
use strip_pong::settings::{SETTINGS_FILE, Settings};
use strip_pong::sim::{EdgeDetector, MatchPhase, MatchState, project, tick};

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    log::info!(
        "strip pong starting ({} leds, tick {} ms)",
        settings.game_config().track_len,
        settings.tick_ms
    );

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), cursor::Hide)?;
    let result = run(&settings);
    execute!(io::stdout(), cursor::Show)?;
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn run(settings: &Settings) -> io::Result<()> {
    let config = settings.game_config();
    let track_len = config.track_len;

    let clock = MonotonicClock::new();
    let mut sink = TerminalStrip::new(settings.brightness);
    let mut buttons = TerminalButtons::new(settings.key_hold_ms);
    let mut edges = EdgeDetector::default();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = MatchState::new(config, seed);
    log::info!("match seeded with {seed}");

    if settings.startup_test {
        play_self_test(&mut sink, track_len)?;
    }

    let mut last_phase = state.phase;
    loop {
        let now_ms = clock.now_ms();

        let snapshot = edges.sample(buttons.levels(now_ms));
        if buttons.quit_requested() {
            log::info!("quit requested");
            return Ok(());
        }

        tick(&mut state, &snapshot, now_ms);

        if state.phase != last_phase {
            log::debug!("phase {:?} -> {:?}", last_phase, state.phase);
            last_phase = state.phase;
        }

        // The winner's sweep replaces the normal projection until a restart.
        let frame = if state.phase == MatchPhase::GameOver {
            let step = (now_ms / animations::SWEEP_FRAME_MS) as usize;
            animations::sweep_frame(step, track_len)
        } else {
            project(&state, now_ms)
        };
        sink.write(&frame)?;

        let elapsed = clock.now_ms().saturating_sub(now_ms);
        let remaining = settings.tick_ms.saturating_sub(elapsed);
        if remaining > 0 {
            thread::sleep(Duration::from_millis(remaining));
        }
    }
}

/// Walk a single white pixel across the strip once before the match starts
fn play_self_test(sink: &mut impl DisplaySink, track_len: usize) -> io::Result<()> {
    log::info!("running led self test");
    let mut step = 0;
    while let Some(frame) = animations::test_frame(step, track_len) {
        sink.write(&frame)?;
        thread::sleep(Duration::from_millis(animations::TEST_FRAME_MS));
        step += 1;
    }
    Ok(())
}
