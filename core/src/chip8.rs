use std::collections::VecDeque;
use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

use crate::constants::{KEY_COUNT, MAX_SAVED_STATES};
use crate::error::{Fault, LoadError};
use crate::event::Event;
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::operations::execute;
use crate::state::State;

/// # Machine
/// A whole Chip-8 interpreter: the live `State`, a bounded history of earlier states to rewind
/// through, the random source behind `Cxnn` and a flag raised whenever the screen changes.
///
/// The host owns the clock. It calls `step` once per instruction, `tick` at 60Hz and
/// `take_frame` whenever it is ready to draw.
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
    history: usize,
    draw_flag: bool,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose `RND` instructions always produce the same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            previous_states: VecDeque::new(),
            history: MAX_SAVED_STATES,
            draw_flag: false,
            rng,
        }
    }

    /// Limit how many past states are kept for `reverse_cpu`; 0 turns rewinding off.
    pub fn set_history(&mut self, history: usize) {
        self.history = history;
        self.previous_states.truncate(history);
    }

    /// Load a rom into program memory
    ///
    /// # Arguments
    /// * `rom` the raw ROM bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.state.memory.load(rom)?;
        info!(size = rom.len(), "Loaded ROM");
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Replace the pressed status of every key
    ///
    /// # Arguments
    /// * `keys` whether each key 0..F is currently held down
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.keypad.set(keys);
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at the pc and moves the pc past it
    /// - decodes and executes it, skipping it if it can't be decoded
    pub fn step(&mut self) -> Option<Event> {
        self.save_state();

        let pc = self.state.pc;
        let op = self.state.memory.word(pc);
        self.state.skip();

        let event = match Instruction::decode(op) {
            Some(instruction) => {
                trace!("{:03X}: {} {}", pc, Opcode(op), instruction);
                execute(instruction, &mut self.state, &mut self.rng)
            }
            None => {
                let fault = Fault::UnknownOpcode { opcode: op, pc };
                warn!("{}", fault);
                Some(Event::Fault(fault))
            }
        };

        match event {
            Some(Event::DisplayDirty) => self.draw_flag = true,
            Some(Event::ToneStart) => debug!("Tone started"),
            Some(Event::ToneStop) => debug!("Tone stopped"),
            _ => {}
        }
        event
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    ///
    /// Returns whether there was anything to restore.
    pub fn reverse_cpu(&mut self) -> bool {
        match self.previous_states.pop_front() {
            Some(state) => {
                self.state = state;
                self.draw_flag = true;
                true
            }
            None => false,
        }
    }

    /// Puts the current state in previous_states
    /// - if there are already `history` saved then the oldest is dropped
    fn save_state(&mut self) {
        if self.history == 0 {
            return;
        }
        if self.previous_states.len() >= self.history {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(self.state.clone());
    }

    /// Decrements the delay and sound timers; called at 60Hz.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.state.timers.tick();
        if event.is_some() {
            debug!("Tone stopped");
        }
        event
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the draw flag
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.draw_flag {
            self.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn tone_active(&self) -> bool {
        self.state.timers.tone_active()
    }

    /// Read-only view of the whole machine.
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip8_with(rom: &[u8]) -> Chip8 {
        let mut chip8 = Chip8::with_seed(0);
        chip8.load_rom(rom).unwrap();
        chip8
    }

    #[test]
    fn test_cycles_advance_pc() {
        let mut chip8 = chip8_with(&[0x00, 0xE0]);
        let starting_pc = chip8.state.pc;
        chip8.step();
        assert_eq!(chip8.state.pc, starting_pc + 0x2);
    }

    #[test]
    fn test_unknown_opcode_is_skipped() {
        let mut chip8 = chip8_with(&[0xFF, 0xFF, 0x60, 0x01]);
        let before = chip8.state.clone();
        assert_eq!(
            chip8.step(),
            Some(Event::Fault(Fault::UnknownOpcode {
                opcode: 0xFFFF,
                pc: 0x200
            }))
        );
        assert_eq!(chip8.state.pc, 0x202);
        assert_eq!(chip8.state.v, before.v);
        assert_eq!(chip8.state.memory, before.memory);
        chip8.step();
        assert_eq!(chip8.state.v[0x0], 0x1);
    }

    #[test]
    fn test_draw_sets_frame() {
        let mut chip8 = chip8_with(&[0xD0, 0x05]);
        assert!(chip8.take_frame().is_none());
        assert_eq!(chip8.step(), Some(Event::DisplayDirty));
        assert!(chip8.take_frame().is_some());
        assert!(chip8.take_frame().is_none());
    }

    #[test]
    fn test_tick_reports_tone_stop() {
        // LD V0, 2; LD ST, V0
        let mut chip8 = chip8_with(&[0x60, 0x02, 0xF0, 0x18]);
        chip8.step();
        assert_eq!(chip8.step(), Some(Event::ToneStart));
        assert!(chip8.tone_active());
        assert_eq!(chip8.tick(), None);
        assert_eq!(chip8.tick(), Some(Event::ToneStop));
        assert!(!chip8.tone_active());
    }

    #[test]
    fn test_set_keys_replaces_keypad() {
        let mut chip8 = Chip8::with_seed(0);
        let mut keys = [false; KEY_COUNT];
        keys[0x4] = true;
        chip8.set_keys(keys);
        assert!(chip8.state.keypad.is_pressed(0x4));
        chip8.set_keys([false; KEY_COUNT]);
        assert!(!chip8.state.keypad.is_pressed(0x4));
    }

    #[test]
    fn test_load_rom_from_reader() {
        let mut chip8 = Chip8::with_seed(0);
        let mut rom: &[u8] = &[0x12, 0x00];
        chip8.load_rom_from(&mut rom).unwrap();
        assert_eq!(chip8.state.memory.word(0x200), 0x1200);
    }

    #[test]
    fn test_chip8_saves_state() {
        let mut chip8 = Chip8::with_seed(0);
        chip8.save_state();
        assert_eq!(chip8.previous_states.len(), 1);
    }

    #[test]
    fn test_chip8_drops_old_saved_states() {
        let mut chip8 = Chip8::with_seed(0);
        chip8.set_history(8);
        for _ in 0..8 {
            chip8.save_state();
        }
        assert_eq!(8, chip8.previous_states.len());
        chip8.save_state();
        assert_eq!(8, chip8.previous_states.len());
    }

    #[test]
    fn test_history_can_be_disabled() {
        let mut chip8 = chip8_with(&[0x60, 0x01]);
        chip8.set_history(0);
        chip8.step();
        assert!(!chip8.reverse_cpu());
        assert_eq!(chip8.state.v[0x0], 0x1);
    }

    #[test]
    fn test_reverse_cpu_restores_previous_state() {
        // LD V0, 1; LD V0, 2
        let mut chip8 = chip8_with(&[0x60, 0x01, 0x60, 0x02]);
        chip8.step();
        chip8.step();
        assert_eq!(chip8.state.v[0x0], 0x2);

        assert!(chip8.reverse_cpu());
        assert_eq!(chip8.state.v[0x0], 0x1);
        assert_eq!(chip8.state.pc, 0x202);
        assert!(chip8.take_frame().is_some());

        assert!(chip8.reverse_cpu());
        assert_eq!(chip8.state.v[0x0], 0x0);
        assert_eq!(chip8.state.pc, 0x200);

        assert!(!chip8.reverse_cpu());
    }
}
