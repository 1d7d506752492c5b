use chipvm_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chipvm_core::Pixels;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use crate::raster;

/// # Window
///
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The window only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Window {
    canvas: WindowCanvas,
}

impl Window {
    /// Creates a new window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw.
    /// * `scale` the magnitude with which that size of each pixel should be multiplied.
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "chipvm",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        let mut display = Window { canvas };
        display.render(&[[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT])?;
        Ok(display)
    }

    /// Renders a single Chip-8 frame.
    ///
    /// The frame is uploaded at its native resolution and stretched over the whole canvas.
    pub fn render(&mut self, frame: &Pixels) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            raster::rgb24(frame, buffer, pitch);
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
