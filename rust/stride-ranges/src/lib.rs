//! Bounded integer range iteration.
//!
//! This crate iterates half-open integer intervals `[start, end)` with an
//! implicit step of one or with an explicit non-zero signed step. It offers:
//!
//! - **Unit ranges**: [`UnitRangeIter`] visits `start, start + 1, ..., end - 1`.
//! - **Stepped ranges**: [`SteppedRange`] / [`SteppedRangeIter`] visit
//!   `start, start + step, ...` in either direction, using one comparison and
//!   one increment per element regardless of the step's sign.
//! - **From-end bounds**: [`Index`] and [`IndexRange`] express bounds relative
//!   to a length anchor (`^2` is two before the end) and resolve them to
//!   concrete integers.
//!
//! Both iterators also expose the explicit `advance()` / `current()` pull
//! protocol in addition to [`Iterator`].
//!
//! # Key Types
//!
//! - [`UnitRangeIter`] - Iterator over a range with step 1
//! - [`SteppedRange`] - A validated `(start, end, step)` triple
//! - [`SteppedRangeIter`] - Sign-folded iterator over a stepped range
//! - [`RangeStrideExt`] - Extension trait for `Range<T>`

pub mod ext;
pub mod fold;
pub mod index;
pub mod stepped;
pub mod unit;

pub use ext::RangeStrideExt;
pub use fold::StrideInt;
pub use index::{Index, IndexRange, SteppedIndexRange};
pub use stepped::{SteppedRange, SteppedRangeIter};
pub use unit::UnitRangeIter;
