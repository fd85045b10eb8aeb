//! Extension trait for iterating `Range<T>` values with the stride iterators.

use std::ops::Range;

use stride_common::Result;

use crate::fold::StrideInt;
use crate::stepped::SteppedRange;
use crate::unit::UnitRangeIter;

/// Extension trait for building stride iterators from a `Range<T>`.
pub trait RangeStrideExt<T: StrideInt> {
    /// Iterates the range with step 1.
    fn unit_iter(self) -> UnitRangeIter<T>;

    /// Pairs the range with a step.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidStep` error if `step` is zero or `T::MIN`.
    fn stepped(self, step: T) -> Result<SteppedRange<T>>;
}

impl<T: StrideInt> RangeStrideExt<T> for Range<T> {
    fn unit_iter(self) -> UnitRangeIter<T> {
        UnitRangeIter::from_range(self)
    }

    fn stepped(self, step: T) -> Result<SteppedRange<T>> {
        SteppedRange::from_range(self, step)
    }
}
