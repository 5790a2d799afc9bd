//! Rotating triple buffer of displacement slices.
//!
//! [`TripleBuffer`] owns three equally sized slices that play the roles
//! previous (`t-1`), current (`t`) and next (`t+1`). [`rotate`](TripleBuffer::rotate)
//! shifts the roles cyclically without moving any data:
//!
//! ```text
//! before:  previous=A  current=B  next=C
//! after:   previous=B  current=C  next=A
//! ```
//!
//! The slot that held `t-1` becomes scratch for the next write.

/// Three equally sized `f32` slices with cyclic role rotation.
#[derive(Clone)]
pub struct TripleBuffer {
    slots: [Vec<f32>; 3],
    /// Slot index currently acting as `previous`. `current` is the next
    /// slot and `next` the one after, modulo 3.
    previous: usize,
}

impl TripleBuffer {
    /// Allocate three zero-filled slices of `len` cells.
    pub fn zeroed(len: usize) -> Self {
        Self {
            slots: [vec![0.0; len], vec![0.0; len], vec![0.0; len]],
            previous: 0,
        }
    }

    /// Number of cells per slice.
    pub fn len(&self) -> usize {
        self.slots[0].len()
    }

    /// Whether the slices are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, offset: usize) -> usize {
        (self.previous + offset) % 3
    }

    /// Displacement at `t-1`.
    pub fn previous(&self) -> &[f32] {
        &self.slots[self.slot(0)]
    }

    /// Displacement at `t`.
    pub fn current(&self) -> &[f32] {
        &self.slots[self.slot(1)]
    }

    /// Scratch slice for `t+1`. Holds stale data until written.
    pub fn next(&self) -> &[f32] {
        &self.slots[self.slot(2)]
    }

    /// Mutable access to `t-1`.
    pub fn previous_mut(&mut self) -> &mut [f32] {
        let i = self.slot(0);
        &mut self.slots[i]
    }

    /// Mutable access to `t`.
    pub fn current_mut(&mut self) -> &mut [f32] {
        let i = self.slot(1);
        &mut self.slots[i]
    }

    /// Borrow `(previous, current, next)` at once, `next` writable.
    pub fn split_mut(&mut self) -> (&[f32], &[f32], &mut [f32]) {
        let [a, b, c] = &mut self.slots;
        match self.previous {
            0 => (a.as_slice(), b.as_slice(), c.as_mut_slice()),
            1 => (b.as_slice(), c.as_slice(), a.as_mut_slice()),
            _ => (c.as_slice(), a.as_slice(), b.as_mut_slice()),
        }
    }

    /// Shift roles: previous ← current, current ← next, next ← old previous.
    pub fn rotate(&mut self) {
        self.previous = self.slot(1);
    }

    /// Zero all three slices and restore the initial role assignment.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.fill(0.0);
        }
        self.previous = 0;
    }
}

impl std::fmt::Debug for TripleBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripleBuffer")
            .field("len", &self.len())
            .field("previous_slot", &self.previous)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged() -> TripleBuffer {
        let mut buf = TripleBuffer::zeroed(2);
        buf.previous_mut().fill(1.0);
        buf.current_mut().fill(2.0);
        let (_, _, next) = buf.split_mut();
        next.fill(3.0);
        buf
    }

    #[test]
    fn zeroed_has_three_equal_slices() {
        let buf = TripleBuffer::zeroed(16);
        assert_eq!(buf.len(), 16);
        assert!(!buf.is_empty());
        assert!(buf.previous().iter().all(|&v| v == 0.0));
        assert!(buf.current().iter().all(|&v| v == 0.0));
        assert!(buf.next().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn split_mut_matches_accessors() {
        let mut buf = tagged();
        let (p, c, n) = buf.split_mut();
        assert_eq!(p, &[1.0, 1.0]);
        assert_eq!(c, &[2.0, 2.0]);
        assert_eq!(n, &[3.0, 3.0]);
    }

    #[test]
    fn rotate_shifts_roles() {
        let mut buf = tagged();
        buf.rotate();
        assert_eq!(buf.previous(), &[2.0, 2.0]);
        assert_eq!(buf.current(), &[3.0, 3.0]);
        assert_eq!(buf.next(), &[1.0, 1.0]);
    }

    #[test]
    fn three_rotations_are_identity() {
        let mut buf = tagged();
        for _ in 0..3 {
            buf.rotate();
        }
        assert_eq!(buf.previous(), &[1.0, 1.0]);
        assert_eq!(buf.current(), &[2.0, 2.0]);
        assert_eq!(buf.next(), &[3.0, 3.0]);
    }

    #[test]
    fn split_mut_follows_rotation() {
        let mut buf = tagged();
        buf.rotate();
        buf.rotate();
        let (p, c, n) = buf.split_mut();
        assert_eq!(p, &[3.0, 3.0]);
        assert_eq!(c, &[1.0, 1.0]);
        n[0] = 9.0;
        assert_eq!(buf.next(), &[9.0, 2.0]);
    }

    #[test]
    fn clear_zeroes_and_resets_roles() {
        let mut buf = tagged();
        buf.rotate();
        buf.clear();
        assert!(buf.previous().iter().all(|&v| v == 0.0));
        assert!(buf.current().iter().all(|&v| v == 0.0));
        assert!(buf.next().iter().all(|&v| v == 0.0));
    }
}
