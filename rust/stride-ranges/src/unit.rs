//! Iteration over a half-open range with an implicit step of one.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::fold::{StrideInt, span};

/// Iterator over `[start, end)` with step 1.
///
/// The cursor starts one before `start` so that the first call to
/// [`advance`](Self::advance) is the same increment-and-test as every
/// following call. The subtraction wraps, so `start == T::MIN` is handled
/// exactly: the wrapped cursor steps back onto `T::MIN`.
///
/// Inverted ranges (`start > end`) and empty ranges (`start == end`) produce
/// no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRangeIter<T> {
    /// The last produced value, or `start - 1` before the first advance.
    cursor: T,
    /// Exclusive upper bound.
    end: T,
}

impl<T: StrideInt> UnitRangeIter<T> {
    /// Creates an iterator over `[start, end)`.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        UnitRangeIter {
            cursor: start.wrapping_sub(&T::one()),
            end,
        }
    }

    /// Creates an iterator over the given `Range`.
    #[inline]
    pub fn from_range(range: Range<T>) -> Self {
        Self::new(range.start, range.end)
    }

    /// Moves to the next value and reports whether it lies within the range.
    ///
    /// The cursor only moves when the next value is in range, so once this
    /// returns `false` every later call returns `false` as well.
    #[inline]
    pub fn advance(&mut self) -> bool {
        let next = self.cursor.wrapping_add(&T::one());
        let has_value = next < self.end;
        if has_value {
            self.cursor = next;
        }
        has_value
    }

    /// Returns the value the last successful [`advance`](Self::advance) moved to.
    ///
    /// Only meaningful after `advance()` returned `true`. Before the first
    /// advance this is `start - 1`; after exhaustion it is the last produced
    /// value.
    #[inline]
    pub fn current(&self) -> T {
        self.cursor
    }

    /// Exclusive upper bound of the range.
    pub fn end(&self) -> T {
        self.end
    }

    /// Number of values left to produce, or `None` if it does not fit in `usize`.
    pub fn remaining(&self) -> Option<usize> {
        let next = self.cursor.wrapping_add(&T::one());
        if next >= self.end {
            return Some(0);
        }
        usize::try_from(span(next, self.end)?).ok()
    }
}

impl<T: StrideInt> Iterator for UnitRangeIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.advance() {
            Some(self.current())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<T: StrideInt> FusedIterator for UnitRangeIter<T> {}

impl<T: StrideInt> From<Range<T>> for UnitRangeIter<T> {
    fn from(range: Range<T>) -> Self {
        Self::from_range(range)
    }
}
