use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use tracing::debug;

use chipvm_core::Pixels;
use chipvm_display::Window;

use crate::keymap::pressed_keys;
use crate::run::{Controls, Frontend};

/// An SDL2 window with keyboard input.
///
/// Holding Space fast-forwards and holding Escape rewinds.
pub struct Sdl {
    window: Window,
    events: EventPump,
    // the context must outlive the window and event pump
    _sdl: sdl2::Sdl,
}

impl Sdl {
    pub fn new(scale: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| anyhow!("unable to start SDL: {}", e))?;
        let window = Window::new(&sdl, scale).map_err(|e| anyhow!("unable to open window: {}", e))?;
        let events = sdl.event_pump().map_err(|e| anyhow!("unable to read events: {}", e))?;
        Ok(Sdl {
            window,
            events,
            _sdl: sdl,
        })
    }
}

impl Frontend for Sdl {
    fn poll(&mut self) -> Result<Controls> {
        let quit = self
            .events
            .poll_iter()
            .any(|event| matches!(event, Event::Quit { .. }));

        let keyboard = self.events.keyboard_state();
        Ok(Controls {
            keys: pressed_keys(&keyboard),
            quit,
            rewind: keyboard.is_scancode_pressed(Scancode::Escape),
            fast_forward: keyboard.is_scancode_pressed(Scancode::Space),
        })
    }

    fn present(&mut self, frame: &Pixels) -> Result<()> {
        self.window
            .render(frame)
            .map_err(|e| anyhow!("unable to render frame: {}", e))
    }

    fn tone(&mut self, on: bool) {
        debug!("tone {}", if on { "on" } else { "off" });
    }
}
