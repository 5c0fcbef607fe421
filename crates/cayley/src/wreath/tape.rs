//! Sparse, sorted lamp configuration of a wreath state.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::algebra::Group;

/// Finite-support map from top-group addresses to base-group values.
///
/// Invariants (checked by every mutator)
/// - no entry holds the base identity;
/// - entries iterate in ascending address order (`K: Ord`), so two tapes
///   describing the same function are equal as data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tape<K: Ord, V> {
    cells: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for Tape<K, V> {
    fn default() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V: Clone + Eq> Tape<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `(address, value)` pairs, multiplying repeated addresses
    /// together and dropping identities.
    pub fn from_cells<G>(base: &G, cells: impl IntoIterator<Item = (K, V)>) -> Self
    where
        G: Group<Elem = V>,
    {
        let mut tape = Self::new();
        for (addr, value) in cells {
            tape.multiply_at(addr, &value, base);
        }
        tape
    }

    pub fn get(&self, addr: &K) -> Option<&V> {
        self.cells.get(addr)
    }

    /// Value at `addr`, with the base identity for empty cells.
    pub fn value_at<G>(&self, addr: &K, base: &G) -> V
    where
        G: Group<Elem = V>,
    {
        self.cells.get(addr).cloned().unwrap_or_else(|| base.one())
    }

    /// `tape[addr] ← tape[addr] · delta`, then drop the cell if it became the
    /// identity.
    pub fn multiply_at<G>(&mut self, addr: K, delta: &V, base: &G)
    where
        G: Group<Elem = V>,
    {
        match self.cells.entry(addr) {
            btree_map::Entry::Occupied(mut slot) => {
                let next = base.multiply(slot.get(), delta);
                if base.is_one(&next) {
                    slot.remove();
                } else {
                    slot.insert(next);
                }
            }
            btree_map::Entry::Vacant(slot) => {
                let next = base.multiply(&base.one(), delta);
                if !base.is_one(&next) {
                    slot.insert(next);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.cells.iter()
    }

    /// Addresses carrying a non-identity value, ascending.
    pub fn support(&self) -> impl Iterator<Item = &K> {
        self.cells.keys()
    }

    /// True iff no stored value equals the base identity.
    pub fn is_sparse<G>(&self, base: &G) -> bool
    where
        G: Group<Elem = V>,
    {
        self.cells.values().all(|v| !base.is_one(v))
    }
}
