/// Wrapping write cursor over a fixed number of slots.
///
/// The cursor always names the oldest slot, i.e. the one the next sample
/// overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRing {
    cursor: usize,
    len: usize,
}

impl SlotRing {
    /// Ring over `len` slots. `len` must be > 0.
    pub const fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self { cursor: 0, len }
    }

    /// Return the slot about to be overwritten and step past it.
    #[inline]
    pub fn advance(&mut self) -> usize {
        let slot = self.cursor;
        self.cursor = if slot + 1 == self.len { 0 } else { slot + 1 };
        slot
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
