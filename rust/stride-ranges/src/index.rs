//! Range bounds that may be counted from the end of a sequence.
//!
//! An [`Index`] is either an absolute position or a position counted back
//! from a length anchor (`^2` is two before the end). Bounds are resolved to
//! concrete integers with [`Index::offset`] before any iterator is built, so
//! the iterators themselves only ever see plain `(start, end)` pairs.
//!
//! Resolving against a zero length turns a from-end value into its negation,
//! which makes `^100..0` the range `[-100, 0)`.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use stride_common::{Result, error::Error, verify_arg};

use crate::fold::StrideInt;
use crate::stepped::{SteppedRange, SteppedRangeIter, verify_step};
use crate::unit::UnitRangeIter;

/// A non-negative position, counted either from the start or from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index<T> {
    value: T,
    from_end: bool,
}

impl<T: StrideInt> Index<T> {
    /// Creates an index counted from the start.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `value` is negative.
    pub fn from_start(value: T) -> Result<Self> {
        verify_arg!(value, !value.is_negative());
        Ok(Index {
            value,
            from_end: false,
        })
    }

    /// Creates an index counted back from the end.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `value` is negative.
    pub fn from_end(value: T) -> Result<Self> {
        verify_arg!(value, !value.is_negative());
        Ok(Index {
            value,
            from_end: true,
        })
    }

    /// The first position (`0`).
    pub fn start() -> Self {
        Index {
            value: T::zero(),
            from_end: false,
        }
    }

    /// The position just past the last element (`^0`).
    pub fn end() -> Self {
        Index {
            value: T::zero(),
            from_end: true,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_from_end(&self) -> bool {
        self.from_end
    }

    /// Resolves the index against a sequence of length `len`.
    ///
    /// Indices counted from the start resolve to their value; indices counted
    /// from the end resolve to `len - value`. `len` is not required to be
    /// non-negative, and the result is not clamped to `[0, len]`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `len - value` overflows `T`.
    pub fn offset(&self, len: T) -> Result<T> {
        if !self.from_end {
            return Ok(self.value);
        }
        len.checked_sub(&self.value).ok_or_else(|| {
            log::debug!("index {self} overflows when resolved against length {len}");
            Error::out_of_range("offset", format!("{self} from length {len}"))
        })
    }
}

impl<T: StrideInt> fmt::Display for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from_end {
            write!(f, "^{}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Parses `N` or `^N`. Negative values are rejected, as with the constructors.
impl<T: StrideInt + FromStr> FromStr for Index<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let (digits, from_end) = match text.strip_prefix('^') {
            Some(rest) => (rest, true),
            None => (text, false),
        };
        let value = digits.parse::<T>().map_err(|_| {
            Error::invalid_arg("index", format!("cannot parse '{s}' as an integer index"))
        })?;
        if from_end {
            Index::from_end(value)
        } else {
            Index::from_start(value)
        }
    }
}

/// A half-open range whose bounds are [`Index`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange<T> {
    pub start: Index<T>,
    pub end: Index<T>,
}

impl<T: StrideInt> IndexRange<T> {
    pub fn new(start: Index<T>, end: Index<T>) -> Self {
        IndexRange { start, end }
    }

    /// `start..^0`
    pub fn start_at(start: Index<T>) -> Self {
        Self::new(start, Index::end())
    }

    /// `0..end`
    pub fn end_at(end: Index<T>) -> Self {
        Self::new(Index::start(), end)
    }

    /// `0..^0`
    pub fn all() -> Self {
        Self::new(Index::start(), Index::end())
    }

    /// Resolves both bounds against a sequence of length `len`.
    pub fn resolve(&self, len: T) -> Result<Range<T>> {
        Ok(self.start.offset(len)?..self.end.offset(len)?)
    }

    /// Resolves the bounds and returns an iterator with step 1.
    pub fn iter(&self, len: T) -> Result<UnitRangeIter<T>> {
        self.resolve(len).map(UnitRangeIter::from_range)
    }

    /// Attaches a step to the range. The bounds stay unresolved until
    /// [`SteppedIndexRange::iter`] is called.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidStep` error under the same rules as
    /// [`SteppedRange::new`].
    pub fn step(self, step: T) -> Result<SteppedIndexRange<T>> {
        verify_step(step)?;
        Ok(SteppedIndexRange { range: self, step })
    }
}

impl<T: StrideInt> fmt::Display for IndexRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// An [`IndexRange`] paired with a validated non-zero step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteppedIndexRange<T> {
    range: IndexRange<T>,
    step: T,
}

impl<T: StrideInt> SteppedIndexRange<T> {
    pub fn range(&self) -> IndexRange<T> {
        self.range
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Resolves the bounds against a sequence of length `len`.
    pub fn resolve(&self, len: T) -> Result<SteppedRange<T>> {
        SteppedRange::from_range(self.range.resolve(len)?, self.step)
    }

    /// Resolves the bounds and returns the stepped iterator.
    pub fn iter(&self, len: T) -> Result<SteppedRangeIter<T>> {
        Ok(self.resolve(len)?.iter())
    }
}

#[cfg(test)]
#[allow(clippy::reversed_empty_ranges)]
mod tests {
    use stride_common::error::ErrorKind;

    use super::*;

    fn idx(value: i32) -> Index<i32> {
        Index::from_start(value).unwrap()
    }

    fn hat(value: i32) -> Index<i32> {
        Index::from_end(value).unwrap()
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let err = Index::from_start(-1).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "value"),
            other => panic!("unexpected kind {other:?}"),
        }
        assert!(Index::from_end(-1).is_err());
        assert!(Index::from_end(0).is_ok());
    }

    #[test]
    fn test_offset() {
        assert_eq!(idx(3).offset(10).unwrap(), 3);
        assert_eq!(hat(3).offset(10).unwrap(), 7);
        assert_eq!(hat(100).offset(0).unwrap(), -100);
        assert_eq!(Index::<i32>::start().offset(10).unwrap(), 0);
        assert_eq!(Index::<i32>::end().offset(10).unwrap(), 10);
    }

    #[test]
    fn test_offset_overflow() {
        let index = Index::from_end(100i8).unwrap();
        let err = index.offset(-100).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::OutOfRange { .. }));
        assert_eq!(err.to_string(), "offset is out of range: ^100 from length -100");
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<Index<i32>>().unwrap(), idx(5));
        assert_eq!("^5".parse::<Index<i32>>().unwrap(), hat(5));
        assert_eq!(" ^0 ".parse::<Index<i64>>().unwrap(), Index::end());
        assert!("-5".parse::<Index<i32>>().is_err());
        assert!("^-5".parse::<Index<i32>>().is_err());
        assert!("^".parse::<Index<i32>>().is_err());
        assert!("five".parse::<Index<i32>>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(idx(7).to_string(), "7");
        assert_eq!(hat(7).to_string(), "^7");
        assert_eq!(IndexRange::new(hat(100), idx(0)).to_string(), "^100..0");
        assert_eq!(IndexRange::<i32>::all().to_string(), "0..^0");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(IndexRange::new(hat(100), idx(0)).resolve(0).unwrap(), -100..0);
        assert_eq!(IndexRange::new(idx(100), hat(100)).resolve(0).unwrap(), 100..-100);
        assert_eq!(IndexRange::start_at(idx(2)).resolve(5).unwrap(), 2..5);
        assert_eq!(IndexRange::end_at(hat(1)).resolve(5).unwrap(), 0..4);
        assert_eq!(IndexRange::<i32>::all().resolve(5).unwrap(), 0..5);
    }

    #[test]
    fn test_all_with_zero_length_is_empty() {
        assert_eq!(IndexRange::<i32>::all().iter(0).unwrap().count(), 0);
    }

    #[test]
    fn test_unit_iteration() {
        let sum: i32 = IndexRange::new(hat(100), idx(100)).iter(0).unwrap().sum();
        assert_eq!(sum, (-100..100).sum::<i32>());
    }

    #[test]
    fn test_stepped_iteration() {
        let stepped = IndexRange::new(hat(100), idx(100)).step(2).unwrap();
        assert_eq!(stepped.step(), 2);
        assert_eq!(stepped.range().start, hat(100));
        assert_eq!(stepped.iter(0).unwrap().sum::<i32>(), -100);

        let stepped = IndexRange::new(idx(99), hat(101)).step(-1).unwrap();
        assert_eq!(stepped.iter(0).unwrap().sum::<i32>(), -100);
        assert_eq!(
            stepped.resolve(0).unwrap(),
            SteppedRange::new(99, -101, -1).unwrap()
        );
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let err = IndexRange::new(idx(0), idx(10)).step(0).unwrap_err();
        assert!(err.is_invalid_step());
    }
}
