use sdl2::keyboard::{KeyboardState, Scancode};

use chipvm_core::constants::KEY_COUNT;

/// Physical key for each keypad value, indexed by that value.
///
/// The hexadecimal keypad sits on the left four alphanumeric columns, by position rather than
/// by label so that non-QWERTY layouts keep the same shape.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
const LAYOUT: [Scancode; KEY_COUNT] = [
    Scancode::X,
    Scancode::Num1,
    Scancode::Num2,
    Scancode::Num3,
    Scancode::Q,
    Scancode::W,
    Scancode::E,
    Scancode::A,
    Scancode::S,
    Scancode::D,
    Scancode::Z,
    Scancode::C,
    Scancode::Num4,
    Scancode::R,
    Scancode::F,
    Scancode::V,
];

/// The keypad value a physical key stands for, if any.
pub fn keypad_value(scancode: Scancode) -> Option<u8> {
    LAYOUT
        .iter()
        .position(|&key| key == scancode)
        .map(|value| value as u8)
}

/// Snapshot of which keypad keys are held down right now.
pub fn pressed_keys(keyboard: &KeyboardState) -> [bool; KEY_COUNT] {
    let mut keys = [false; KEY_COUNT];
    for value in keyboard.pressed_scancodes().filter_map(keypad_value) {
        keys[value as usize] = true;
    }
    keys
}
