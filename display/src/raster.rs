use chipvm_core::Pixels;

/// Colour of lit pixels.
pub const FOREGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];
/// Colour of unlit pixels.
pub const BACKGROUND: [u8; 3] = [0x00, 0x00, 0x00];

/// Writes `pixels` into an RGB24 buffer laid out as rows of `pitch` bytes.
///
/// The buffer holds one texel per Chip-8 pixel; scaling is left to whatever presents it.
///
/// # Arguments
/// * `pixels` the frame to rasterize
/// * `buffer` destination, at least `pitch * DISPLAY_HEIGHT` bytes
/// * `pitch` bytes per row, at least `DISPLAY_WIDTH * 3`
pub fn rgb24(pixels: &Pixels, buffer: &mut [u8], pitch: usize) {
    for (y, row) in pixels.iter().enumerate() {
        for (x, &lit) in row.iter().enumerate() {
            let offset = y * pitch + x * 3;
            let color = if lit { FOREGROUND } else { BACKGROUND };
            buffer[offset..offset + 3].copy_from_slice(&color);
        }
    }
}
