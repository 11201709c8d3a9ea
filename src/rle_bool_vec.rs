// A growable vector of booleans stored as runs.
// Only the start index and value of each maximal run are kept, in an ordered map,
// so memory is proportional to the number of runs rather than the number of elements.
// The store is always in canonical form: neighbouring runs never share a value,
// the first run starts at zero, and no run starts at or beyond `len`.
//
// Point updates (set, push_back, pop_back) patch boundaries in place.
// Everything else goes through two primitives: `append_runs`, which streams a RunList
// onto the end, and `rebuild_tail`, which harvests the runs after a position,
// truncates there, and re-appends a combined list.

use std::fmt;
use std::ops::Range;

use log::{debug, trace};

use crate::bit_vec::BitVec;
use crate::error::{Error, Result};
use crate::iter::{Iter, Runs};
use crate::run_list::{RunList, RunPair};
use crate::run_store::RunStore;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RleBoolVec {
    runs: RunStore,
    len: usize,
}

impl RleBoolVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vector of `len` copies of `value`.
    pub fn from_elem(value: bool, len: usize) -> Self {
        let runs = if len > 0 {
            RunStore::single(value)
        } else {
            RunStore::new()
        };
        Self { runs, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of maximal runs of equal values.
    pub fn num_runs(&self) -> usize {
        self.runs.len()
    }

    /// Returns the value at `index`.
    ///
    /// Fails with [`Error::OutOfRange`] unless `index < len`.
    pub fn at(&self, index: usize) -> Result<bool> {
        self.locate(index).map(|(_, value)| value)
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.at(index).ok()
    }

    pub fn front(&self) -> Option<bool> {
        self.runs.first().map(|(_, value)| value)
    }

    pub fn back(&self) -> Option<bool> {
        self.runs.last().map(|(_, value)| value)
    }

    /// Overwrites the value at `index`.
    ///
    /// The run containing `index` is split, merged into its left neighbour, or
    /// updated in place, and the boundary at `index + 1` is then added or removed
    /// so that the rest of the old run keeps its value.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        let (start, old) = self.locate(index)?;
        if old == value {
            return Ok(());
        }

        if start == index {
            let merges_left = index > 0
                && self
                    .runs
                    .predecessor(index)
                    .is_some_and(|(_, prev)| prev == value);
            if merges_left {
                self.runs.remove(index);
            } else {
                self.runs.set_value(index, value);
            }
        } else {
            self.runs.emplace(index, value);
        }

        // The last element has nothing to its right.
        if index + 1 < self.len {
            match self.runs.get(index + 1) {
                Some(next) if next == value => {
                    self.runs.remove(index + 1);
                }
                _ => {
                    self.runs.emplace(index + 1, old);
                }
            }
        }
        Ok(())
    }

    /// Appends `value`.
    ///
    /// # Panics
    ///
    /// Panics if the length would overflow `usize`.
    pub fn push_back(&mut self, value: bool) {
        let len = self.grown_len(1).unwrap_or_else(|e| panic!("{}", e));
        if self.back() != Some(value) {
            self.runs.emplace(self.len, value);
        }
        self.len = len;
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`Error::Empty`] on an empty vector.
    pub fn pop_back(&mut self) -> Result<bool> {
        let (start, value) = self.runs.last().ok_or(Error::Empty)?;
        self.len -= 1;
        if start == self.len {
            self.runs.remove(start);
        }
        Ok(value)
    }

    /// Inserts `value` at `pos`, shifting later elements right.
    /// Returns the index of the inserted element.
    pub fn insert(&mut self, pos: usize, value: bool) -> Result<usize> {
        self.insert_elem(pos, value, 1)
    }

    /// Inserts `count` copies of `value` at `pos`.
    ///
    /// Fails with [`Error::CapacityOverflow`] if the length would overflow `usize`.
    pub fn insert_elem(&mut self, pos: usize, value: bool, count: usize) -> Result<usize> {
        self.check_position(pos)?;
        self.grown_len(count)?;
        self.insert_runs(pos, RunList::repeat(value, count));
        Ok(pos)
    }

    /// Inserts every value of `iter` at `pos`, in order.
    pub fn insert_iter<I>(&mut self, pos: usize, iter: I) -> Result<usize>
    where
        I: IntoIterator<Item = bool>,
    {
        self.check_position(pos)?;
        let list: RunList = iter.into_iter().collect();
        self.grown_len(list.len())?;
        self.insert_runs(pos, list);
        Ok(pos)
    }

    /// Removes and returns the element at `pos`.
    pub fn erase(&mut self, pos: usize) -> Result<bool> {
        let value = self.at(pos)?;
        self.rebuild_tail(pos, pos + 1, RunList::new());
        Ok(value)
    }

    /// Removes the elements in `range`.
    /// Returns the index of the element that now follows the removed range.
    ///
    /// An empty range with `end <= len` removes nothing and succeeds, even on an
    /// empty vector. Fails with [`Error::InvalidRange`] if `start > end` and with
    /// [`Error::OutOfRange`] if `end > len`.
    pub fn erase_range(&mut self, range: Range<usize>) -> Result<usize> {
        let Range { start, end } = range;
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        self.check_position(end)?;
        if start < end {
            self.rebuild_tail(start, end, RunList::new());
        }
        Ok(start)
    }

    /// Shortens the vector to `len` elements; no-op if it is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.runs.truncate_from(len);
            self.len = len;
        }
    }

    /// Resizes the vector in place, filling new slots with `value`.
    pub fn resize(&mut self, len: usize, value: bool) {
        if len > self.len {
            self.append_runs(RunList::repeat(value, len - self.len));
        } else {
            self.truncate(len);
        }
    }

    pub fn clear(&mut self) {
        self.runs.clear();
        self.len = 0;
    }

    /// Replaces the contents with the values of `iter`.
    pub fn assign<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.clear();
        self.append_runs(iter.into_iter().collect());
        debug!("assigned {} values in {} runs", self.len, self.num_runs());
    }

    /// Replaces the contents with `len` copies of `value`.
    pub fn assign_elem(&mut self, value: bool, len: usize) {
        *self = Self::from_elem(value, len);
    }

    /// Negates every element. Costs O(runs).
    pub fn flip(&mut self) {
        self.runs.flip();
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.runs, self.len)
    }

    pub fn runs(&self) -> Runs<'_> {
        Runs::new(&self.runs, self.len)
    }

    /// The values from `index` to the end as run-length pairs.
    /// The first pair is clipped so that it starts at `index`.
    pub fn run_list_from(&self, index: usize) -> RunList {
        let mut list = RunList::new();
        if index >= self.len {
            return list;
        }
        let Some((first, _)) = self.runs.run_containing(index) else {
            return list;
        };
        let mut iter = self.runs.range_from(first).peekable();
        while let Some((start, value)) = iter.next() {
            let end = iter.peek().map_or(self.len, |&(next, _)| next);
            list.push_run(end - start.max(index), value);
        }
        list
    }

    /// Bounds-checks `index` and returns the run containing it.
    fn locate(&self, index: usize) -> Result<(usize, bool)> {
        let out_of_range = Error::OutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.runs.run_containing(index).ok_or(out_of_range)
    }

    // Length after growing by `additional`, checked before any mutation.
    fn grown_len(&self, additional: usize) -> Result<usize> {
        self.len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow {
                len: self.len,
                additional,
            })
    }

    fn check_position(&self, pos: usize) -> Result<()> {
        if pos > self.len {
            return Err(Error::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        Ok(())
    }

    fn insert_runs(&mut self, pos: usize, list: RunList) {
        if list.is_empty() {
            return;
        }
        if pos == self.len {
            self.append_runs(list);
        } else {
            self.rebuild_tail(pos, pos, list);
        }
    }

    // Replaces [from, resume) with `head`: the runs from `resume` onwards are
    // harvested, everything from `from` is dropped, and `head` followed by the
    // harvested runs is appended back.
    fn rebuild_tail(&mut self, from: usize, resume: usize, mut head: RunList) {
        let tail = self.run_list_from(resume);
        let harvested = tail.num_runs();
        head.append(tail);

        self.runs.truncate_from(from);
        self.len = from;
        self.append_runs(head);

        trace!(
            "rebuilt tail at {}: {} runs harvested, {} runs total",
            from,
            harvested,
            self.num_runs()
        );
        debug_assert!(self.check_invariants().is_ok());
    }

    // Streams `list` onto the end. A pair matching the current last run extends it;
    // any other pair starts a new boundary at the current length.
    fn append_runs(&mut self, list: RunList) {
        let mut last = self.back();
        for RunPair { count, value } in list {
            if last != Some(value) {
                self.runs.emplace(self.len, value);
                last = Some(value);
            }
            self.len += count;
        }
    }

    /// Verifies the canonical-form invariants of the run store.
    pub(crate) fn check_invariants(&self) -> std::result::Result<(), String> {
        if (self.len == 0) != self.runs.is_empty() {
            return Err(format!(
                "len {} with {} runs",
                self.len,
                self.runs.len()
            ));
        }
        if let Some((first, _)) = self.runs.first() {
            if first != 0 {
                return Err(format!("first run starts at {}", first));
            }
        }
        if let Some((last, _)) = self.runs.last() {
            if last >= self.len {
                return Err(format!("run at {} beyond len {}", last, self.len));
            }
        }
        let mut prev: Option<(usize, bool)> = None;
        for (start, value) in self.runs.iter() {
            if let Some((prev_start, prev_value)) = prev {
                if prev_value == value {
                    return Err(format!(
                        "runs at {} and {} share value {}",
                        prev_start, start, value
                    ));
                }
            }
            prev = Some((start, value));
        }
        Ok(())
    }
}

impl BitVec for RleBoolVec {
    fn rank1(&self, index: usize) -> usize {
        let index = index.min(self.len);
        self.runs()
            .take_while(|run| run.start < index)
            .filter(|run| run.value)
            .map(|run| run.end().min(index) - run.start)
            .sum()
    }

    fn select1(&self, n: usize) -> Option<usize> {
        select(self.runs(), true, n)
    }

    fn select0(&self, n: usize) -> Option<usize> {
        select(self.runs(), false, n)
    }

    fn num_ones(&self) -> usize {
        self.rank1(self.len)
    }

    fn len(&self) -> usize {
        self.len
    }
}

// Index of the n-th (0-based) occurrence of `value`.
fn select(runs: Runs<'_>, value: bool, mut n: usize) -> Option<usize> {
    for run in runs.filter(|run| run.value == value) {
        if n < run.len {
            return Some(run.start + n);
        }
        n -= run.len;
    }
    None
}

impl fmt::Debug for RleBoolVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RleBoolVec")
            .field("len", &self.len)
            .field("runs", &self.runs.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for RleBoolVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            f.write_str(if value { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Extend<bool> for RleBoolVec {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let list: RunList = iter.into_iter().collect();
        if let Err(e) = self.grown_len(list.len()) {
            panic!("{}", e);
        }
        self.append_runs(list);
    }
}

impl FromIterator<bool> for RleBoolVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut v = Self::new();
        v.assign(iter);
        v
    }
}

impl From<&[bool]> for RleBoolVec {
    fn from(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }
}

impl From<Vec<bool>> for RleBoolVec {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().collect()
    }
}

impl<const N: usize> From<[bool; N]> for RleBoolVec {
    fn from(values: [bool; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a RleBoolVec {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
