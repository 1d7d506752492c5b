/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 0x1000;

/// Addresses are 12 bits wide; anything computed past 0xFFF wraps around.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// ROMs are loaded (and execution begins) here.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// The font sprite sheet lives at 0x050..0x0A0.
pub const FONT_START: u16 = 0x050;

/// Every font glyph is 5 rows tall.
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Maximum depth of nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Sprites are always a byte (8 pixels) wide.
pub const SPRITE_WIDTH: usize = 8;

/// Timers (and the host frame) run at 60Hz.
pub const TIMER_HZ: u32 = 60;

pub const DEFAULT_CYCLES_PER_FRAME: u32 = 10;

/// How many past states are kept for rewinding; about two seconds at the default cycle rate.
pub const MAX_SAVED_STATES: usize = 1200;

/// # Sprite sheet
/// One 8x5 glyph per hexadecimal digit, only the high nibble of each row is drawn.
///
/// ```text
/// 0xF0 -> ####
/// 0x90 -> #  #
/// 0x90 -> #  #
/// 0x90 -> #  #
/// 0xF0 -> ####
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
