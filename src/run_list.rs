// Run-length encoding of boolean sequences as (count, value) pairs.
// This is the intermediate form every bulk mutation of an RleBoolVec goes through:
// insertions encode their input into a RunList, the tail beyond the mutation point
// is harvested into another, and the two are concatenated before being re-appended.
// Pushing onto a RunList always coalesces with the last pair and drops empty pairs,
// so a list is minimal no matter how it was assembled.

/// A run of `count` consecutive copies of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunPair {
    pub count: usize,
    pub value: bool,
}

impl RunPair {
    pub fn new(count: usize, value: bool) -> Self {
        Self { count, value }
    }
}

/// A minimal ordered list of runs: no pair is empty and no two neighbouring
/// pairs share a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RunList {
    pairs: Vec<RunPair>,
    len: usize,
}

impl RunList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding `count` copies of `value`.
    pub fn repeat(value: bool, count: usize) -> Self {
        let mut list = Self::new();
        list.push_run(count, value);
        list
    }

    /// Appends `count` copies of `value`, coalescing with the last pair.
    ///
    /// # Panics
    ///
    /// Panics if the total length overflows `usize`.
    pub fn push_run(&mut self, count: usize, value: bool) {
        if count == 0 {
            return;
        }
        self.len = match self.len.checked_add(count) {
            Some(len) => len,
            None => panic!("capacity overflow"),
        };
        match self.pairs.last_mut() {
            Some(last) if last.value == value => last.count += count,
            _ => self.pairs.push(RunPair::new(count, value)),
        }
    }

    pub fn push(&mut self, value: bool) {
        self.push_run(1, value);
    }

    /// Concatenates `other` onto the end of this list.
    /// The junction is re-coalesced, so the result stays minimal.
    pub fn append(&mut self, other: RunList) {
        for RunPair { count, value } in other.pairs {
            self.push_run(count, value);
        }
    }

    /// Total number of elements described by the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs.
    pub fn num_runs(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[RunPair] {
        &self.pairs
    }

    /// Expands the list back into individual values.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.pairs
            .iter()
            .flat_map(|p| std::iter::repeat(p.value).take(p.count))
    }
}

impl Extend<bool> for RunList {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<bool> for RunList {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for RunList {
    type Item = RunPair;
    type IntoIter = std::vec::IntoIter<RunPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
