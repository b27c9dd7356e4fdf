use crate::unicode::SPACE;

/// An owned sequence of UTF-16 code units.
///
/// Every shaping pass works on 16-bit units: a surrogate pair is two
/// unrelated units, never one scalar value.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointBuffer(Vec<u16>);

impl CodePointBuffer {
    /// Creates a buffer with space for at least `capacity` code units.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        CodePointBuffer(Vec::with_capacity(capacity))
    }

    /// Returns the number of code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks that the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends code units.
    pub fn extend_from_slice(&mut self, units: &[u16]) {
        self.0.extend_from_slice(units);
    }

    /// Returns the code units.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    /// Returns the code units mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.0
    }

    /// Consumes the buffer and returns its code units.
    #[inline]
    pub fn into_vec(self) -> Vec<u16> {
        self.0
    }

    /// Reverses the buffer in place, leaving leading and trailing
    /// runs of U+0020 where they are.
    pub(crate) fn reverse_between_spaces(&mut self) {
        let (start, end) = trimmed_range(&self.0);
        self.0[start..end].reverse();
    }

    /// Drops every occurrence of the given code units.
    pub(crate) fn remove_all(&mut self, units: &[u16]) {
        self.0.retain(|c| !units.contains(c));
    }
}

impl From<Vec<u16>> for CodePointBuffer {
    fn from(units: Vec<u16>) -> Self {
        CodePointBuffer(units)
    }
}

impl From<&[u16]> for CodePointBuffer {
    fn from(units: &[u16]) -> Self {
        CodePointBuffer(units.to_vec())
    }
}

impl std::fmt::Debug for CodePointBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CodePointBuffer[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:04X}", c)?;
        }
        f.write_str("]")
    }
}

/// Returns the range left after stripping leading and trailing spaces.
///
/// A buffer made only of spaces yields an empty range at its end.
fn trimmed_range(units: &[u16]) -> (usize, usize) {
    let start = units.iter().take_while(|c| **c == SPACE).count();
    if start == units.len() {
        return (start, start);
    }

    let trailing = units.iter().rev().take_while(|c| **c == SPACE).count();
    (start, units.len() - trailing)
}

/// Moves the item at `from` to `to`, shifting everything in between by one.
///
/// Equivalent to `remove(from)` followed by `insert(to, item)`, without
/// reallocating.
#[inline]
pub(crate) fn move_item<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}
