pub use chip8::Chip8;
pub use error::{Fault, LoadError};
pub use event::Event;
pub use frame_buffer::{FrameBuffer, Pixels};
pub use instruction::Instruction;
pub use state::State;

mod chip8;
pub mod constants;
mod error;
mod event;
mod frame_buffer;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod stack;
pub mod state;
pub mod timers;
