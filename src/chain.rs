//! Sorted chain over the window slots.
//!
//! The chain is an arena of `W + 2` cells addressed by plain indices: two
//! sentinels followed by the `W` slots. Successor links are indices, so every
//! splice is a single index write.

use heapless::Vec;

use crate::sample::Sample;

/// Head sentinel. Its value is never read.
const TOP: usize = 0;
/// Tail sentinel. Holds the stopper and links to itself.
const BOTTOM: usize = 1;
/// Arena index of slot 0.
const FIRST_SLOT: usize = 2;

#[derive(Debug, Clone, Copy)]
struct Cell<T> {
    value: T,
    next: usize,
}

/// Slots kept linked in non-increasing order of value:
/// `TOP -> largest -> ... -> smallest -> BOTTOM`.
#[derive(Debug, Clone)]
pub struct OrderChain<T, const N: usize> {
    sentinels: [Cell<T>; 2],
    slots: Vec<Cell<T>, N>,
}

impl<T: Sample, const N: usize> OrderChain<T, N> {
    /// Chain of `window_size` slots seeded with `stopper`.
    ///
    /// `window_size` must be in `1..=N`.
    pub fn new(window_size: usize, stopper: T) -> Self {
        debug_assert!(window_size > 0 && window_size <= N);

        let mut slots = Vec::new();
        for _ in 0..window_size.min(N) {
            let _ = slots.push(Cell {
                value: stopper,
                next: BOTTOM,
            });
        }

        let mut chain = Self {
            sentinels: [
                Cell {
                    value: stopper,
                    next: BOTTOM,
                },
                Cell {
                    value: stopper,
                    next: BOTTOM,
                },
            ],
            slots,
        };
        chain.reseed(stopper);
        chain
    }

    /// Overwrite every slot with `stopper` and relink them in slot order.
    pub fn reseed(&mut self, stopper: T) {
        let len = self.slots.len();
        for (i, cell) in self.slots.iter_mut().enumerate() {
            cell.value = stopper;
            cell.next = if i + 1 == len { BOTTOM } else { FIRST_SLOT + i + 1 };
        }
        self.sentinels[TOP] = Cell {
            value: stopper,
            next: FIRST_SLOT,
        };
        self.sentinels[BOTTOM] = Cell {
            value: stopper,
            next: BOTTOM,
        };
    }

    /// Replace the value held by `slot` and return the median of the window.
    ///
    /// One walk from `TOP` to `BOTTOM` unlinks `slot` from its old position,
    /// links it in front of the first smaller value, and drags a second cursor
    /// along at half speed. The walk visits `W` nodes (the `W - 1` surviving
    /// slots plus `BOTTOM`) and the slow cursor steps on every odd visit, so
    /// it stops `ceil(W / 2)` links below `TOP`.
    ///
    /// `value` must be strictly greater than the stopper.
    pub fn replace(&mut self, slot: usize, value: T) -> T {
        let target = FIRST_SLOT + slot;
        let successor = self.next(target);

        let mut inserted = false;
        let mut median = TOP;
        let mut visited = 0usize;

        if self.next(TOP) == target {
            self.link(TOP, successor);
        }
        let mut prev = TOP;
        let mut scan = self.next(TOP);

        loop {
            // Unlink the old reading before the walk reaches it
            if self.next(scan) == target {
                self.link(scan, successor);
            }

            if !inserted && self.value(scan) < value {
                self.link(target, self.next(prev));
                self.link(prev, target);
                inserted = true;
            }

            visited += 1;
            if visited % 2 == 1 {
                median = self.next(median);
            }

            if scan == BOTTOM {
                break;
            }
            prev = scan;
            scan = self.next(scan);
        }

        // Unreachable while `value` is above the stopper held by BOTTOM
        if !inserted {
            self.link(target, self.next(prev));
            self.link(prev, target);
        }

        self.cell_mut(target).value = value;
        self.value(median)
    }

    /// Value currently held by `slot`.
    pub fn slot_value(&self, slot: usize) -> T {
        self.slots[slot].value
    }

    /// Values from largest to smallest, sentinels excluded.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            chain: self,
            at: self.next(TOP),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn cell(&self, id: usize) -> &Cell<T> {
        match id.checked_sub(FIRST_SLOT) {
            Some(slot) => &self.slots[slot],
            None => &self.sentinels[id],
        }
    }

    #[inline]
    fn cell_mut(&mut self, id: usize) -> &mut Cell<T> {
        match id.checked_sub(FIRST_SLOT) {
            Some(slot) => &mut self.slots[slot],
            None => &mut self.sentinels[id],
        }
    }

    #[inline]
    fn value(&self, id: usize) -> T {
        self.cell(id).value
    }

    #[inline]
    fn next(&self, id: usize) -> usize {
        self.cell(id).next
    }

    #[inline]
    fn link(&mut self, from: usize, to: usize) {
        self.cell_mut(from).next = to;
    }
}

/// Iterator over the chain, see [`OrderChain::iter`].
pub struct Iter<'a, T, const N: usize> {
    chain: &'a OrderChain<T, N>,
    at: usize,
}

impl<T: Sample, const N: usize> Iterator for Iter<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.at == BOTTOM {
            return None;
        }
        let value = self.chain.value(self.at);
        self.at = self.chain.next(self.at);
        Some(value)
    }
}
