//! Location-size buckets: blank cells partitioned by current candidate count.

use std::collections::BTreeSet;

/// Ten buckets (indices `0..=9`) holding the blank cells whose candidate set
/// currently has that many members. Bucket 0 is a contradiction; bucket 1
/// holds naked singles.
#[derive(Debug, Clone)]
pub(crate) struct Buckets {
    buckets: [BTreeSet<(usize, usize)>; 10],
}

impl Buckets {
    pub(crate) fn new() -> Self {
        Buckets {
            buckets: Default::default(),
        }
    }

    pub(crate) fn insert(&mut self, size: usize, cell: (usize, usize)) {
        self.buckets[size].insert(cell);
    }

    pub(crate) fn remove(&mut self, size: usize, cell: (usize, usize)) {
        self.buckets[size].remove(&cell);
    }

    /// Moves `cell` from bucket `from` to bucket `to`.
    pub(crate) fn move_cell(&mut self, cell: (usize, usize), from: usize, to: usize) {
        self.remove(from, cell);
        self.insert(to, cell);
    }

    pub(crate) fn is_empty(&self, size: usize) -> bool {
        self.buckets[size].is_empty()
    }

    pub(crate) fn iter(&self, size: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.buckets[size].iter().copied()
    }

    /// The first cell in the smallest non-empty bucket with index `>= min_size`,
    /// i.e. the MRV branching cell once naked/hidden singles are exhausted.
    pub(crate) fn smallest_at_least(&self, min_size: usize) -> Option<(usize, usize)> {
        (min_size..10).find_map(|size| self.buckets[size].iter().next().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cell_transfers_membership() {
        let mut b = Buckets::new();
        b.insert(5, (0, 0));
        assert!(!b.is_empty(5));
        b.move_cell((0, 0), 5, 4);
        assert!(b.is_empty(5));
        assert_eq!(b.iter(4).collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn smallest_at_least_skips_empty_buckets() {
        let mut b = Buckets::new();
        b.insert(2, (1, 1));
        b.insert(3, (2, 2));
        assert_eq!(b.smallest_at_least(2), Some((1, 1)));
        b.remove(2, (1, 1));
        assert_eq!(b.smallest_at_least(2), Some((2, 2)));
    }
}
