use fixedbitset::FixedBitSet;

use std::fmt;


/// A set of node indexes at which evaluation stops descending.
/// A node in the set is treated as a leaf,
/// which simulates pruning without modifying the tree.
#[derive(Clone, Default)]
pub struct StopSet {
    bits: FixedBitSet,
}


impl StopSet {
    /// Construct an empty `StopSet`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct an empty `StopSet` that holds indexes
    /// in `[0, n_nodes)` without reallocation.
    #[inline]
    pub fn with_capacity(n_nodes: usize) -> Self {
        Self { bits: FixedBitSet::with_capacity(n_nodes) }
    }


    /// Add `index` to the set.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        if index >= self.bits.len() {
            self.bits.grow(index + 1);
        }
        self.bits.insert(index);
    }


    /// Returns `true` if `index` is in the set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.bits.contains(index)
    }


    /// Returns the number of indexes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }


    /// Returns `true` if the set has no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Remove every index.
    #[inline]
    pub fn clear(&mut self) {
        self.bits.clear();
    }


    /// Iterate over the indexes in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}


impl FromIterator<usize> for StopSet {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = usize>
    {
        let mut stop_set = Self::new();
        stop_set.extend(iter);
        stop_set
    }
}


impl Extend<usize> for StopSet {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = usize>
    {
        iter.into_iter()
            .for_each(|index| self.insert(index));
    }
}


impl PartialEq for StopSet {
    // Equal sets may have different capacities.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}


impl Eq for StopSet {}


impl fmt::Debug for StopSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
