use crate::constants::STACK_DEPTH;

/// # Call stack
/// Return addresses pushed by `CALL` and popped by `RET`.
///
/// `sp` is the number of live entries, so it is always in `0..=STACK_DEPTH`.
/// Pushing onto a full stack or popping an empty one is refused rather than wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CallStack {
    entries: [u16; STACK_DEPTH],
    sp: usize,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` if the stack is already `STACK_DEPTH` deep.
    pub fn push(&mut self, addr: u16) -> Option<()> {
        let slot = self.entries.get_mut(self.sp)?;
        *slot = addr;
        self.sp += 1;
        Some(())
    }

    /// Returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<u16> {
        self.sp = self.sp.checked_sub(1)?;
        Some(self.entries[self.sp])
    }

    pub fn sp(&self) -> usize {
        self.sp
    }

    /// Live entries, oldest first.
    pub fn entries(&self) -> &[u16] {
        &self.entries[..self.sp]
    }
}
