use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use chipvm_core::constants::{KEY_COUNT, TIMER_HZ};
use chipvm_core::{Chip8, Event, Pixels};

/// What the player is asking for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub keys: [bool; KEY_COUNT],
    pub quit: bool,
    /// Whether the game's state should be cycled backwards
    pub rewind: bool,
    /// Whether the frame rate should be ignored
    pub fast_forward: bool,
}

/// Everything outside the machine: input, video and sound.
pub trait Frontend {
    /// Gather input; called once at the start of every frame.
    fn poll(&mut self) -> Result<Controls>;

    /// Show a frame; only called when the frame buffer changed.
    fn present(&mut self, frame: &Pixels) -> Result<()>;

    /// Turn the tone on or off.
    fn tone(&mut self, _on: bool) {}
}

pub struct Config {
    pub cycles_per_frame: u32,
    /// Stop after this many frames
    pub frame_limit: Option<u64>,
    /// Dump the machine state after every frame
    pub debug: bool,
}

/// Counts how many fixed-rate periods have elapsed, independently of how often it is asked.
pub struct Cadence {
    period: Duration,
    last: Instant,
}

impl Cadence {
    pub fn new(hz: u32, start: Instant) -> Self {
        Cadence {
            period: Duration::from_secs(1) / hz,
            last: start,
        }
    }

    /// How many periods have passed since the last call.
    ///
    /// Falling more than a second behind drops the backlog instead of replaying it.
    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let periods = (elapsed.as_nanos() / self.period.as_nanos()) as u32;
        let limit = (Duration::from_secs(1).as_nanos() / self.period.as_nanos()) as u32;
        if periods > limit {
            self.last = now;
            return limit;
        }
        self.last += self.period * periods;
        periods
    }
}

/// Drives `chip8` until the front end asks to quit or `frame_limit` frames have run.
///
/// Each frame:
/// - replaces the keypad with whatever the front end reports
/// - runs `cycles_per_frame` cycles, or rewinds as many
/// - ticks the timers at 60Hz of wall-clock time
/// - presents the frame buffer if it changed
/// - sleeps out the rest of the frame unless fast-forwarding
pub fn run(chip8: &mut Chip8, frontend: &mut dyn Frontend, config: &Config) -> Result<u64> {
    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut last_frame = Instant::now();
    let mut timers = Cadence::new(TIMER_HZ, last_frame);
    let mut frames = 0;

    loop {
        if config.frame_limit.map_or(false, |limit| frames >= limit) {
            break;
        }

        // Handle input
        let controls = frontend.poll()?;
        if controls.quit {
            break;
        }
        chip8.set_keys(controls.keys);

        // Update state
        let tone_before = chip8.tone_active();
        for _ in 0..config.cycles_per_frame {
            if controls.rewind {
                if !chip8.reverse_cpu() {
                    break;
                }
            } else if let Some(event) = chip8.step() {
                forward(event, frontend);
            }
        }
        // restored states carry their own sound timer
        if controls.rewind && chip8.tone_active() != tone_before {
            frontend.tone(chip8.tone_active());
        }

        for _ in 0..timers.due(Instant::now()) {
            if controls.rewind {
                continue;
            }
            if let Some(event) = chip8.tick() {
                forward(event, frontend);
            }
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            frontend.present(frame.pixels())?;
        }

        if config.debug {
            debug!("\n{}", chip8.state());
        }
        frames += 1;

        // Handle timing
        let current_time = Instant::now();
        let elapsed_frame_time = current_time - last_frame;
        if !controls.fast_forward && frame_time > elapsed_frame_time {
            std::thread::sleep(frame_time - elapsed_frame_time);
        }
        last_frame = Instant::now();
    }

    Ok(frames)
}

fn forward(event: Event, frontend: &mut dyn Frontend) {
    match event {
        Event::ToneStart => frontend.tone(true),
        Event::ToneStop => frontend.tone(false),
        // presentation goes through `take_frame`, faults are already logged
        Event::DisplayDirty | Event::Fault(_) => {}
    }
}
