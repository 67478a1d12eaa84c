//! Finite ammunition pool.

use log::trace;

/// Round counter. Invariant: `0 <= count <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoMagazine {
    count: u32,
    capacity: u32,
}

impl AmmoMagazine {
    /// A full magazine.
    pub fn new(capacity: u32) -> Self {
        Self {
            count: capacity,
            capacity,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Take one round. Returns false and leaves the count alone when empty.
    pub fn consume(&mut self) -> bool {
        if self.count == 0 {
            trace!("dry fire, magazine empty");
            return false;
        }
        self.count -= 1;
        true
    }

    /// Refill to capacity. Idempotent.
    pub fn reload(&mut self) {
        self.count = self.capacity;
    }
}

impl Default for AmmoMagazine {
    fn default() -> Self {
        Self::new(marksman_core::constants::MAGAZINE_CAPACITY)
    }
}
