// Ordered storage for run boundaries: maps the start index of each run to its value.
// Lookups mirror the classic ordered-map vocabulary (lower/upper bound, predecessor,
// successor) since the vector's algorithms are phrased in those terms.
// Entries are returned by value as (start, value) pairs; positions are the keys themselves.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct RunStore {
    starts: BTreeMap<usize, bool>,
}

impl RunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding a single run starting at zero.
    pub fn single(value: bool) -> Self {
        let mut store = Self::new();
        store.emplace(0, value);
        store
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn clear(&mut self) {
        self.starts.clear();
    }

    /// Inserts a boundary unless one already starts at `start`.
    /// Returns whether the boundary was inserted.
    pub fn emplace(&mut self, start: usize, value: bool) -> bool {
        match self.starts.entry(start) {
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn remove(&mut self, start: usize) -> Option<bool> {
        self.starts.remove(&start)
    }

    /// Removes every boundary with start >= `start`.
    pub fn truncate_from(&mut self, start: usize) {
        // split_off hands back the removed half; dropping it frees the nodes.
        drop(self.starts.split_off(&start));
    }

    /// Value of the boundary starting exactly at `start`.
    pub fn get(&self, start: usize) -> Option<bool> {
        self.starts.get(&start).copied()
    }

    /// Overwrites the value of an existing boundary.
    /// Returns false if no boundary starts at `start`.
    pub fn set_value(&mut self, start: usize, value: bool) -> bool {
        match self.starts.get_mut(&start) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    /// First boundary with start >= `key`.
    pub fn lower_bound(&self, key: usize) -> Option<(usize, bool)> {
        self.starts.range(key..).next().map(|(&k, &v)| (k, v))
    }

    /// First boundary with start > `key`.
    pub fn upper_bound(&self, key: usize) -> Option<(usize, bool)> {
        let start = key.checked_add(1)?;
        self.lower_bound(start)
    }

    /// The run covering `index`: the boundary with the greatest start <= `index`.
    pub fn run_containing(&self, index: usize) -> Option<(usize, bool)> {
        self.starts.range(..=index).next_back().map(|(&k, &v)| (k, v))
    }

    /// Boundary immediately preceding the one at `start` in store order.
    pub fn predecessor(&self, start: usize) -> Option<(usize, bool)> {
        self.starts.range(..start).next_back().map(|(&k, &v)| (k, v))
    }

    /// Boundary immediately following the one at `start` in store order.
    pub fn successor(&self, start: usize) -> Option<(usize, bool)> {
        self.upper_bound(start)
    }

    pub fn first(&self) -> Option<(usize, bool)> {
        self.starts.first_key_value().map(|(&k, &v)| (k, v))
    }

    pub fn last(&self) -> Option<(usize, bool)> {
        self.starts.last_key_value().map(|(&k, &v)| (k, v))
    }

    /// Negates every run in place.
    pub fn flip(&mut self) {
        for v in self.starts.values_mut() {
            *v = !*v;
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, bool)> + '_ {
        self.starts.iter().map(|(&k, &v)| (k, v))
    }

    /// Boundaries with start >= `start`, in ascending order.
    pub fn range_from(&self, start: usize) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.starts.range(start..).map(|(&k, &v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(entries: &[(usize, bool)]) -> RunStore {
        let mut s = RunStore::new();
        for &(k, v) in entries {
            assert!(s.emplace(k, v));
        }
        s
    }

    #[test]
    fn test_emplace_existing_is_noop() {
        let mut s = store(&[(0, true)]);
        assert!(!s.emplace(0, false));
        assert_eq!(s.get(0), Some(true));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let s = store(&[(0, false), (4, true), (9, false)]);
        assert_eq!(s.lower_bound(4), Some((4, true)));
        assert_eq!(s.lower_bound(5), Some((9, false)));
        assert_eq!(s.lower_bound(10), None);
        assert_eq!(s.upper_bound(4), Some((9, false)));
        assert_eq!(s.upper_bound(9), None);
        assert_eq!(s.upper_bound(usize::MAX), None);
    }

    #[test]
    fn test_navigation() {
        let s = store(&[(0, false), (4, true), (9, false)]);
        assert_eq!(s.run_containing(0), Some((0, false)));
        assert_eq!(s.run_containing(3), Some((0, false)));
        assert_eq!(s.run_containing(4), Some((4, true)));
        assert_eq!(s.run_containing(100), Some((9, false)));
        assert_eq!(s.predecessor(4), Some((0, false)));
        assert_eq!(s.predecessor(0), None);
        assert_eq!(s.successor(4), Some((9, false)));
        assert_eq!(s.successor(9), None);
        assert_eq!(s.first(), Some((0, false)));
        assert_eq!(s.last(), Some((9, false)));
        assert_eq!(RunStore::new().run_containing(0), None);
    }

    #[test]
    fn test_truncate_from() {
        let mut s = store(&[(0, false), (4, true), (9, false)]);
        s.truncate_from(5);
        assert_eq!(s.iter().collect::<Vec<_>>(), [(0, false), (4, true)]);
        s.truncate_from(4);
        assert_eq!(s.iter().collect::<Vec<_>>(), [(0, false)]);
        s.truncate_from(0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_set_value_and_flip() {
        let mut s = store(&[(0, false), (4, true)]);
        assert!(s.set_value(4, false));
        assert!(!s.set_value(5, true));
        s.flip();
        assert_eq!(s.iter().collect::<Vec<_>>(), [(0, true), (4, true)]);
        assert_eq!(s.range_from(1).collect::<Vec<_>>(), [(4, true)]);
    }
}
