use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use tracing::debug;

use chipvm_core::Pixels;
use chipvm_display::text;

use crate::run::{Controls, Frontend};

/// Draws frames to stdout with no input at all; for headless runs and systems without a window.
pub struct Terminal {
    stdout: io::Stdout,
    redraw_in_place: bool,
}

impl Terminal {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let redraw_in_place = stdout.is_terminal();
        Terminal {
            stdout,
            redraw_in_place,
        }
    }
}

impl Frontend for Terminal {
    fn poll(&mut self) -> Result<Controls> {
        Ok(Controls::default())
    }

    fn present(&mut self, frame: &Pixels) -> Result<()> {
        let mut out = self.stdout.lock();
        if self.redraw_in_place {
            // clear and home the cursor
            write!(out, "\x1B[2J\x1B[H")?;
        }
        write!(out, "{}", text::half_blocks(frame))?;
        out.flush().context("unable to write frame to the terminal")
    }

    fn tone(&mut self, on: bool) {
        debug!("tone {}", if on { "on" } else { "off" });
    }
}
