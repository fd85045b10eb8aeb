//! Iteration over a half-open range with an explicit non-zero step.
//!
//! [`SteppedRange`] validates the `(start, end, step)` triple once;
//! [`SteppedRangeIter`] walks it. Ascending and descending walks share one
//! code path: every bound is folded by the sign of the step (see
//! [`crate::fold`]), which turns a descending walk into an ascending one, so
//! the loop body is always "add the step magnitude, compare against the end".

use std::iter::FusedIterator;
use std::ops::Range;

use stride_common::{Result, error::Error};

use crate::fold::{StrideInt, abs_via_mask, fold, sign_mask, span, unfold};

/// A validated half-open range `[start, end)` with a non-zero step.
///
/// For a positive step the range produces `start, start + step, ...` while
/// the value is below `end`. For a negative step it produces values while
/// they are above `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteppedRange<T> {
    start: T,
    end: T,
    step: T,
}

impl<T: StrideInt> SteppedRange<T> {
    /// Creates a stepped range.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidStep` error if `step` is zero, or if it is `T::MIN`
    /// (whose magnitude does not fit in `T`).
    pub fn new(start: T, end: T, step: T) -> Result<Self> {
        verify_step(step)?;
        Ok(SteppedRange { start, end, step })
    }

    /// Creates a stepped range over the given `Range`.
    pub fn from_range(range: Range<T>, step: T) -> Result<Self> {
        Self::new(range.start, range.end, step)
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Returns `true` if the range produces no values.
    pub fn is_empty(&self) -> bool {
        if self.step.is_negative() {
            self.start <= self.end
        } else {
            self.start >= self.end
        }
    }

    /// Returns a fresh iterator over the range.
    #[inline]
    pub fn iter(&self) -> SteppedRangeIter<T> {
        SteppedRangeIter::from_parts(self.start, self.end, self.step)
    }
}

impl<T: StrideInt> IntoIterator for SteppedRange<T> {
    type Item = T;
    type IntoIter = SteppedRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: StrideInt> IntoIterator for &SteppedRange<T> {
    type Item = T;
    type IntoIter = SteppedRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rejects steps the iterator cannot walk: zero, and `T::MIN`.
pub(crate) fn verify_step<T: StrideInt>(step: T) -> Result<()> {
    if step.is_zero() || step == T::min_value() {
        log::debug!("rejected range step {step}");
        return Err(Error::invalid_step(step.to_i128().unwrap_or(i128::MIN)));
    }
    Ok(())
}

/// Sign-folded iterator over a [`SteppedRange`].
///
/// All state lives in folded space: `cursor` and `end` are folded by `sign`,
/// and `magnitude` is the absolute value of the step. The folded cursor only
/// ever increases. [`current`](Self::current) unfolds the cursor back into the
/// caller's value.
///
/// The cursor starts on the folded `start` with a zero `stride`, so the first
/// advance lands on `start` itself; every later advance adds `magnitude`. An
/// increment that would overflow `T` in folded space ends the walk, since the
/// folded end can never lie beyond `T::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteppedRangeIter<T> {
    cursor: T,
    end: T,
    sign: T,
    magnitude: T,
    stride: T,
}

impl<T: StrideInt> SteppedRangeIter<T> {
    /// Creates an iterator over `[start, end)` advancing by `step`.
    ///
    /// # Errors
    ///
    /// Same as [`SteppedRange::new`].
    pub fn new(start: T, end: T, step: T) -> Result<Self> {
        verify_step(step)?;
        Ok(Self::from_parts(start, end, step))
    }

    #[inline]
    fn from_parts(start: T, end: T, step: T) -> Self {
        let sign = sign_mask(step);
        SteppedRangeIter {
            cursor: fold(start, sign),
            end: fold(end, sign),
            sign,
            magnitude: abs_via_mask(step, sign),
            stride: T::zero(),
        }
    }

    /// Moves to the next value and reports whether it lies within the range.
    ///
    /// Once this returns `false` every later call returns `false` as well.
    #[inline]
    pub fn advance(&mut self) -> bool {
        let next = self.cursor.checked_add(&self.stride);
        self.stride = self.magnitude;
        match next {
            Some(next) if next < self.end => {
                self.cursor = next;
                true
            }
            _ => false,
        }
    }

    /// Returns the value the last successful [`advance`](Self::advance) moved to.
    ///
    /// Only meaningful after `advance()` returned `true`.
    #[inline]
    pub fn current(&self) -> T {
        unfold(self.cursor, self.sign)
    }

    /// Number of values left to produce, or `None` if it does not fit in `usize`.
    pub fn remaining(&self) -> Option<usize> {
        let next = match self.cursor.checked_add(&self.stride) {
            Some(next) if next < self.end => next,
            _ => return Some(0),
        };
        let distance = span(next, self.end)?;
        let magnitude = span(T::zero(), self.magnitude)?;
        usize::try_from((distance - 1) / magnitude + 1).ok()
    }
}

impl<T: StrideInt> Iterator for SteppedRangeIter<T> {
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

impl<T: StrideInt> FusedIterator for SteppedRangeIter<T> {}
