//! Ordered sequences whose slots may be holes.

use std::fmt;

/// How an absent slot renders when printed next to concrete values.
pub const ABSENT: &str = "undefined";

/// A fixed sequence of slots, each either holding a value or being a hole.
///
/// A hole is not a value: it compares unequal to every `Some`, zero included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseSeq<T> {
    slots: Vec<Option<T>>,
}

impl<T> SparseSeq<T> {
    pub fn new(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value at `index`. Holes and positions past the end both read as `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// True only for a hole inside the sequence, not for positions past the end.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Indices of every hole, in order.
    pub fn holes(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
    }

}

impl<T: Clone> SparseSeq<T> {
    /// Bind the first three slots positionally; anything after the third is ignored.
    pub fn destructure3(&self) -> (Option<T>, Option<T>, Option<T>) {
        (
            self.get(0).cloned(),
            self.get(1).cloned(),
            self.get(2).cloned(),
        )
    }
}

impl SparseSeq<i64> {
    /// `[1, <hole>, 2, 3]`
    pub fn numbers() -> Self {
        Self::new(vec![Some(1), None, Some(2), Some(3)])
    }
}

impl<T> FromIterator<Option<T>> for SparseSeq<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Display adapter for a single slot.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a, T> {
    value: Option<&'a T>,
    absent: &'a str,
}

impl<'a, T> Slot<'a, T> {
    pub fn with_absent(value: Option<&'a T>, absent: &'a str) -> Self {
        Self { value, absent }
    }
}

impl<T: fmt::Display> fmt::Display for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => value.fmt(f),
            None => f.write_str(self.absent),
        }
    }
}
