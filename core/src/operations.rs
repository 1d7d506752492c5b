use rand::Rng;
use tracing::error;

use crate::constants::{FONT_GLYPH_SIZE, FONT_START};
use crate::error::Fault;
use crate::event::Event;
use crate::instruction::Instruction;
use crate::state::State;

/// Carries out `instruction` against `state`.
///
/// The PC has already been moved past the instruction, so skips add another 2 and jumps simply
/// overwrite it.
pub fn execute<R: Rng>(
    instruction: Instruction,
    state: &mut State,
    rng: &mut R,
) -> Option<Event> {
    match instruction {
        Instruction::Cls => return cls(state),
        Instruction::Ret => return ret(state),
        Instruction::Jp { nnn } => state.jump(nnn),
        Instruction::Call { nnn } => return call(state, nnn),
        Instruction::SeByte { x, nn } => {
            let equal = state.v[x as usize] == nn;
            skip_if(state, equal);
        }
        Instruction::SneByte { x, nn } => {
            let equal = state.v[x as usize] == nn;
            skip_if(state, !equal);
        }
        Instruction::SeReg { x, y } => {
            let equal = state.v[x as usize] == state.v[y as usize];
            skip_if(state, equal);
        }
        Instruction::LdByte { x, nn } => state.v[x as usize] = nn,
        Instruction::AddByte { x, nn } => {
            state.v[x as usize] = state.v[x as usize].wrapping_add(nn);
        }
        Instruction::Ld { x, y } => state.v[x as usize] = state.v[y as usize],
        Instruction::Or { x, y } => state.v[x as usize] |= state.v[y as usize],
        Instruction::And { x, y } => state.v[x as usize] &= state.v[y as usize],
        Instruction::Xor { x, y } => state.v[x as usize] ^= state.v[y as usize],
        Instruction::Add { x, y } => add(state, x, y),
        Instruction::Sub { x, y } => sub(state, x, y),
        Instruction::Shr { x } => shr(state, x),
        Instruction::Subn { x, y } => subn(state, x, y),
        Instruction::Shl { x } => shl(state, x),
        Instruction::SneReg { x, y } => {
            let equal = state.v[x as usize] == state.v[y as usize];
            skip_if(state, !equal);
        }
        Instruction::LdI { nnn } => state.set_i(nnn),
        Instruction::JpV0 { nnn } => state.jump(nnn + u16::from(state.v[0x0])),
        Instruction::Rnd { x, nn } => state.v[x as usize] = rng.gen::<u8>() & nn,
        Instruction::Drw { x, y, n } => return draw(state, x, y, n),
        Instruction::Skp { x } => {
            let pressed = state.keypad.is_pressed(state.v[x as usize]);
            skip_if(state, pressed);
        }
        Instruction::Sknp { x } => {
            let pressed = state.keypad.is_pressed(state.v[x as usize]);
            skip_if(state, !pressed);
        }
        Instruction::LdFromDelay { x } => state.v[x as usize] = state.timers.delay,
        Instruction::WaitKey { x } => wait_key(state, x),
        Instruction::LdDelay { x } => state.timers.delay = state.v[x as usize],
        Instruction::LdSound { x } => return state.timers.set_sound(state.v[x as usize]),
        Instruction::AddI { x } => state.set_i(state.i() + u16::from(state.v[x as usize])),
        Instruction::LdFont { x } => {
            state.set_i(FONT_START + FONT_GLYPH_SIZE * u16::from(state.v[x as usize] & 0xF));
        }
        Instruction::Bcd { x } => bcd(state, x),
        Instruction::Store { x } => store(state, x),
        Instruction::Read { x } => read(state, x),
    }
    None
}

/// if condition then pc += 2
fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.skip();
    }
}

/// clear
fn cls(state: &mut State) -> Option<Event> {
    state.frame_buffer.clear();
    Some(Event::DisplayDirty)
}

/// PC = STACK.pop()
fn ret(state: &mut State) -> Option<Event> {
    match state.stack.pop() {
        Some(addr) => {
            state.jump(addr);
            None
        }
        None => {
            let fault = Fault::StackUnderflow {
                pc: state.pc.wrapping_sub(2),
            };
            error!("{}", fault);
            Some(Event::Fault(fault))
        }
    }
}

/// STACK.push(PC); PC = addr
fn call(state: &mut State, addr: u16) -> Option<Event> {
    match state.stack.push(state.pc) {
        Some(()) => {
            state.jump(addr);
            None
        }
        None => {
            let fault = Fault::StackOverflow {
                pc: state.pc.wrapping_sub(2),
            };
            error!("{}", fault);
            Some(Event::Fault(fault))
        }
    }
}

/// Vx += Vy; VF = carry
fn add(state: &mut State, x: u8, y: u8) {
    let (res, carry) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[x as usize] = res;
    state.v[0xF] = u8::from(carry);
}

/// Vx -= Vy; VF = !borrow
fn sub(state: &mut State, x: u8, y: u8) {
    let (vx, vy) = (state.v[x as usize], state.v[y as usize]);
    state.v[x as usize] = vx.wrapping_sub(vy);
    state.v[0xF] = u8::from(vx >= vy);
}

/// Vx >>= 1; VF = shifted out bit
fn shr(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    state.v[x as usize] = vx >> 1;
    state.v[0xF] = vx & 0x1;
}

/// Vx = Vy - Vx; VF = !borrow
fn subn(state: &mut State, x: u8, y: u8) {
    let (vx, vy) = (state.v[x as usize], state.v[y as usize]);
    state.v[x as usize] = vy.wrapping_sub(vx);
    state.v[0xF] = u8::from(vy >= vx);
}

/// Vx <<= 1; VF = shifted out bit
fn shl(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    state.v[x as usize] = vx << 1;
    state.v[0xF] = (vx >> 7) & 0x1;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Option<Event> {
    let mut sprite = [0; 0xF];
    let rows = &mut sprite[..n as usize];
    for (offset, row) in (0..).zip(rows.iter_mut()) {
        *row = state.memory.read(state.i().wrapping_add(offset));
    }

    let collision = state.frame_buffer.draw_sprite(
        state.v[x as usize] as usize,
        state.v[y as usize] as usize,
        rows,
    );
    state.v[0xF] = u8::from(collision);
    Some(Event::DisplayDirty)
}

/// await keypress for Vx
/// Re-runs this instruction on the next cycle until some key is down.
fn wait_key(state: &mut State, x: u8) {
    match state.keypad.first_pressed() {
        Some(key) => state.v[x as usize] = key,
        None => state.rewind(),
    }
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    let i = state.i();
    state.memory.write(i, vx / 100);
    state.memory.write(i.wrapping_add(1), vx / 10 % 10);
    state.memory.write(i.wrapping_add(2), vx % 10);
}

/// mem[I..=I+x] = V0..=Vx
fn store(state: &mut State, x: u8) {
    let i = state.i();
    for register in 0..=x {
        state
            .memory
            .write(i.wrapping_add(u16::from(register)), state.v[register as usize]);
    }
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: u8) {
    let i = state.i();
    for register in 0..=x {
        state.v[register as usize] = state.memory.read(i.wrapping_add(u16::from(register)));
    }
}
