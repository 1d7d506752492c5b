use crate::error::Fault;

/// Something the host should react to after a `step()` or `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The frame buffer changed and should be presented.
    DisplayDirty,
    /// The sound timer became non-zero.
    ToneStart,
    /// The sound timer reached zero.
    ToneStop,
    /// An instruction could not be executed and was skipped.
    Fault(Fault),
}
