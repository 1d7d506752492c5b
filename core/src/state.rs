use std::fmt;

use crate::constants::{ADDRESS_MASK, PROGRAM_START, REGISTER_COUNT};
use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::stack::CallStack;
use crate::timers::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag and gets clobbered by arithmetic
/// - (i) a 12-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, always below 0x1000
///
/// Stack
/// - 16 return addresses and a stack pointer
///
/// Timers
/// - 2 8-bit timers (delay & sound), ticked at 60Hz
///
/// ## Memory
/// - 4096 bytes of addressable memory
/// - 32x64 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F, as of the last host poll
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    i: u16,
    pub pc: u16,
    pub stack: CallStack,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub timers: Timers,
    pub keypad: Keypad,
}

impl State {
    pub fn new() -> Self {
        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack: CallStack::new(),
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            timers: Timers::new(),
            keypad: Keypad::new(),
        }
    }

    pub fn i(&self) -> u16 {
        self.i
    }

    /// Sets I, keeping only its 12 significant bits.
    pub fn set_i(&mut self, value: u16) {
        self.i = value & ADDRESS_MASK;
    }

    /// Sets the PC, keeping it inside memory.
    pub fn jump(&mut self, addr: u16) {
        self.pc = addr & ADDRESS_MASK;
    }

    /// Moves the PC on by one instruction.
    pub fn skip(&mut self) {
        self.jump(self.pc.wrapping_add(2));
    }

    /// Moves the PC back by one instruction.
    pub fn rewind(&mut self) {
        self.jump(self.pc.wrapping_sub(2));
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Register, stack and key dump for debugging.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC: {:#05X}", self.pc)?;
        writeln!(f, "I:  {:#05X}", self.i)?;
        writeln!(f, "SP: {}", self.stack.sp())?;
        writeln!(f, "DT: {} ST: {}", self.timers.delay, self.timers.sound)?;
        writeln!(f, "Registers:")?;
        for (group, registers) in self.v.chunks(4).enumerate() {
            let line: Vec<String> = registers
                .iter()
                .enumerate()
                .map(|(offset, value)| format!("V{:X}={:02X}", group * 4 + offset, value))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }

        writeln!(f, "Stack:")?;
        if self.stack.sp() == 0 {
            writeln!(f, "Empty")?;
        } else {
            let entries: Vec<String> = self
                .stack
                .entries()
                .iter()
                .map(|addr| format!("{:04X}", addr))
                .collect();
            writeln!(f, "{}", entries.join(" "))?;
        }

        writeln!(f, "Keys:")?;
        let keys: Vec<String> = self.keypad.pressed().map(|k| format!("{:X}", k)).collect();
        if keys.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", keys.join(" "))
        }
    }
}

#[cfg(test)]
mod test_state {
    use super::*;
    use crate::constants::KEY_COUNT;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.i(), 0x0);
        assert_eq!(state.v, [0; REGISTER_COUNT]);
        assert_eq!(state.stack.sp(), 0);
        assert!(state.frame_buffer.is_blank());
    }

    #[test]
    fn test_i_is_masked() {
        let mut state = State::new();
        state.set_i(0x1ABC);
        assert_eq!(state.i(), 0xABC);
    }

    #[test]
    fn test_pc_stays_in_memory() {
        let mut state = State::new();
        state.jump(0xFFE);
        state.skip();
        assert_eq!(state.pc, 0x000);
        state.rewind();
        assert_eq!(state.pc, 0xFFE);
    }

    #[test]
    fn test_debug_dump() {
        let mut state = State::new();
        state.v[0x0] = 0xAB;
        state.v[0xF] = 0x01;
        state.set_i(0x50);
        state.stack.push(0x202).unwrap();
        let mut keys = [false; KEY_COUNT];
        keys[0x4] = true;
        keys[0xC] = true;
        state.keypad.set(keys);

        let expected = "\
PC: 0x200
I:  0x050
SP: 1
DT: 0 ST: 0
Registers:
V0=AB V1=00 V2=00 V3=00
V4=00 V5=00 V6=00 V7=00
V8=00 V9=00 VA=00 VB=00
VC=00 VD=00 VE=00 VF=01
Stack:
0202
Keys:
4 C";
        assert_eq!(state.to_string(), expected);
    }

    #[test]
    fn test_debug_dump_when_idle() {
        let dump = State::new().to_string();
        assert!(dump.contains("Stack:\nEmpty\n"));
        assert!(dump.ends_with("Keys:\nNone"));
    }
}
