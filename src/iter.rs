// Iterators over an RleBoolVec.
// `Iter` yields logical values without materializing the vector: each end caches the
// run it is currently walking and only goes back to the run store when it crosses a
// boundary, so a full pass costs O(R log R) rather than O(N log R).

use std::iter::FusedIterator;

use crate::run_store::RunStore;

/// A stored run: `len` copies of `value` beginning at index `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub len: usize,
    pub value: bool,
}

impl Run {
    /// One past the last index covered by the run.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Iterator over the values of an [`RleBoolVec`](crate::RleBoolVec).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    runs: &'a RunStore,
    // Remaining indices are [front, back).
    front: usize,
    back: usize,
    // Value and exclusive end of the run containing `front`, once looked up.
    front_run: Option<(bool, usize)>,
    // Value and start of the run containing `back - 1`, once looked up.
    back_run: Option<(bool, usize)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(runs: &'a RunStore, len: usize) -> Self {
        Self {
            runs,
            front: 0,
            back: len,
            front_run: None,
            back_run: None,
        }
    }

    /// Index of the element the next call to `next` will yield.
    pub fn position(&self) -> usize {
        self.front
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let value = match self.front_run {
            Some((value, end)) if self.front < end => value,
            _ => {
                let (start, value) = self.runs.run_containing(self.front)?;
                let end = self
                    .runs
                    .successor(start)
                    .map_or(usize::MAX, |(next, _)| next);
                self.front_run = Some((value, end));
                value
            }
        };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.saturating_sub(self.front);
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        // Skipping ahead may leave the cached run; `next` re-checks its end.
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let index = self.back - 1;
        let value = match self.back_run {
            Some((value, start)) if index >= start => value,
            _ => {
                let (start, value) = self.runs.run_containing(index)?;
                self.back_run = Some((value, start));
                value
            }
        };
        self.back = index;
        Some(value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over the stored runs of an [`RleBoolVec`](crate::RleBoolVec), in index order.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    runs: &'a RunStore,
    next: Option<(usize, bool)>,
    len: usize,
    remaining: usize,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(runs: &'a RunStore, len: usize) -> Self {
        Self {
            runs,
            next: runs.first(),
            len,
            remaining: runs.len(),
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let (start, value) = self.next?;
        self.next = self.runs.successor(start);
        let end = self.next.map_or(self.len, |(next, _)| next);
        self.remaining -= 1;
        Some(Run {
            start,
            len: end - start,
            value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Runs<'_> {}

impl FusedIterator for Runs<'_> {}

#[cfg(test)]
mod tests {
    use crate::RleBoolVec;

    #[test]
    fn test_forward_and_backward() {
        let bits = [true, true, false, true, false, false, false, true];
        let v: RleBoolVec = bits.into_iter().collect();
        assert_eq!(v.iter().collect::<Vec<_>>(), bits);
        let mut rev = bits.to_vec();
        rev.reverse();
        assert_eq!(v.iter().rev().collect::<Vec<_>>(), rev);
    }

    #[test]
    fn test_meet_in_the_middle() {
        let v: RleBoolVec = [false, false, true, true, true].into_iter().collect();
        let mut it = v.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(false));
        assert_eq!(it.next_back(), Some(true));
        assert_eq!(it.next(), Some(false));
        assert_eq!(it.next_back(), Some(true));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(true));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_nth_crosses_runs() {
        let v: RleBoolVec = [false, false, true, true, false].into_iter().collect();
        let mut it = v.iter();
        assert_eq!(it.next(), Some(false));
        assert_eq!(it.nth(2), Some(true));
        assert_eq!(it.position(), 4);
        assert_eq!(it.nth(0), Some(false));
        assert_eq!(it.nth(3), None);
    }

    #[test]
    fn test_runs() {
        let v: RleBoolVec = [true, true, false, true, true, true].into_iter().collect();
        let runs: Vec<_> = v.runs().map(|r| (r.start, r.len, r.value)).collect();
        assert_eq!(runs, [(0, 2, true), (2, 1, false), (3, 3, true)]);
        assert_eq!(v.runs().last().map(|r| r.end()), Some(6));
        assert_eq!(RleBoolVec::new().runs().count(), 0);
    }

    #[test]
    fn test_runs_len() {
        let v: RleBoolVec = [false, true, true, false].into_iter().collect();
        let mut runs = v.runs();
        assert_eq!(runs.len(), v.num_runs());
        assert_eq!(runs.len(), 3);
        runs.next();
        assert_eq!(runs.size_hint(), (2, Some(2)));
        runs.by_ref().for_each(drop);
        assert_eq!(runs.len(), 0);
        assert_eq!(runs.next(), None);
        assert_eq!(RleBoolVec::new().runs().len(), 0);
    }
}
