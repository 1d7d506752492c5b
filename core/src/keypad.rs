use crate::constants::KEY_COUNT;

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// The host replaces the whole snapshot once per frame, so a key pressed and released between
/// two polls is never seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, keys: [bool; KEY_COUNT]) {
        self.keys = keys;
    }

    /// Only the low nibble of `key` is considered.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[usize::from(key & 0xF)]
    }

    /// The lowest-numbered key currently held down.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|key| key as u8)
    }

    pub fn pressed(&self) -> impl Iterator<Item = u8> + '_ {
        (0..KEY_COUNT as u8).filter(move |&key| self.is_pressed(key))
    }
}
