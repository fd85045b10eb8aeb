//! Sign-folding arithmetic shared by the range iterators.
//!
//! A value folded by a sign mask is left unchanged when the mask is all zeros
//! and bitwise inverted when the mask is all ones. For two's-complement
//! integers `!v == -v - 1`, so folding by an all-ones mask reverses the order
//! of values: a descending walk becomes an ascending one. This lets a single
//! `cursor < end` test and a single positive increment serve both directions.

use std::fmt;

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingSub};

/// Primitive signed integer usable as a range bound or step.
///
/// Blanket-implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait StrideInt:
    PrimInt + Signed + WrappingAdd + WrappingSub + fmt::Debug + fmt::Display
{
}

impl<T> StrideInt for T where
    T: PrimInt + Signed + WrappingAdd + WrappingSub + fmt::Debug + fmt::Display
{
}

/// Number of bits in `T`.
#[inline(always)]
pub fn bit_width<T: StrideInt>() -> u32 {
    T::zero().count_zeros()
}

/// Arithmetic sign extension of `value`: all ones when negative, all zeros
/// otherwise.
#[inline(always)]
pub fn sign_mask<T: StrideInt>(value: T) -> T {
    value.signed_shr(bit_width::<T>() - 1)
}

/// Folds `value` by `mask` (`value ^ mask`).
///
/// `mask` must be a result of [`sign_mask`].
#[inline(always)]
pub fn fold<T: StrideInt>(value: T, mask: T) -> T {
    value ^ mask
}

/// Inverse of [`fold`]. Folding is an involution, so this is the same transform.
#[inline(always)]
pub fn unfold<T: StrideInt>(value: T, mask: T) -> T {
    fold(value, mask)
}

/// Absolute value of `value` given its own sign mask, computed without a branch.
///
/// Wraps for `T::MIN`, whose magnitude is not representable in `T`.
#[inline(always)]
pub fn abs_via_mask<T: StrideInt>(value: T, mask: T) -> T {
    (value ^ mask).wrapping_sub(&mask)
}

/// Distance from `low` up to `high` as an unsigned count.
///
/// Exact for every pair with `low <= high`, including distances that do not fit
/// in `T` (`i16::MIN` to `i16::MAX` is 65535).
#[inline]
pub fn span<T: StrideInt>(low: T, high: T) -> Option<u128> {
    debug_assert!(low <= high);
    Some(high.to_i128()?.wrapping_sub(low.to_i128()?) as u128)
}
