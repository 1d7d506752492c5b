use chipvm_core::Pixels;

/// Renders a frame as text, packing two rows of pixels into each line with half blocks.
///
/// A 64x32 frame becomes 16 lines of 64 characters.
pub fn half_blocks(pixels: &Pixels) -> String {
    let mut out = String::new();
    for rows in pixels.chunks(2) {
        let upper = &rows[0];
        let lower = rows.get(1);
        for (x, &top) in upper.iter().enumerate() {
            let bottom = lower.map_or(false, |row| row[x]);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod test_text {
    use super::*;
    use chipvm_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
    use chipvm_core::FrameBuffer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_frame() {
        let text = half_blocks(FrameBuffer::new().pixels());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), DISPLAY_HEIGHT / 2);
        assert!(lines.iter().all(|line| line.chars().count() == DISPLAY_WIDTH));
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_half_blocks() {
        let mut fb = FrameBuffer::new();
        // column 0 lit on row 0, column 1 on row 1, column 2 on both
        fb.draw_sprite(0, 0, &[0xA0, 0x60]);
        let text = half_blocks(fb.pixels());
        let first: String = text.lines().next().unwrap().chars().take(4).collect();
        assert_eq!(first, "▀▄█ ");
    }
}
