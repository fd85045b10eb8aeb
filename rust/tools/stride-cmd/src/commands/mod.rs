//! Command implementations for stride-cmd

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::fmt;

use stride_ranges::{Index, SteppedRangeIter, UnitRangeIter};

pub mod list;
pub mod sum;

/// Range bounds and step shared by all commands.
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Inclusive start: `N`, `-N`, or `^N` (N before `--len`)
    pub start: String,

    /// Exclusive end: `N`, `-N`, or `^N` (N before `--len`)
    pub end: String,

    /// Distance between produced values; negative steps walk downwards
    #[arg(short, long)]
    pub step: Option<i64>,

    /// Length anchor used to resolve `^N` bounds
    #[arg(short, long, default_value_t = 0)]
    pub len: i64,
}

impl RangeArgs {
    /// Resolves both bounds to concrete integers.
    pub fn resolve(&self) -> Result<ResolvedRange> {
        let start = parse_bound(&self.start, self.len)?;
        let end = parse_bound(&self.end, self.len)?;
        Ok(ResolvedRange {
            start,
            end,
            step: self.step,
        })
    }
}

/// Parses a bound given as `N`, `-N` or `^N`, resolving `^N` against `len`.
pub fn parse_bound(text: &str, len: i64) -> Result<i64> {
    let text = text.trim();
    if text.starts_with('^') {
        let index: Index<i64> = text
            .parse()
            .with_context(|| format!("Invalid from-end bound: {text}"))?;
        return index
            .offset(len)
            .with_context(|| format!("Cannot resolve bound {text} against length {len}"));
    }
    text.parse::<i64>()
        .with_context(|| format!("Invalid bound: {text}"))
}

/// A range with concrete bounds and an optional step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    pub start: i64,
    pub end: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
}

impl ResolvedRange {
    /// Builds the iterator for the range: the unit iterator when no step was
    /// given, the stepped iterator otherwise.
    pub fn walk(&self) -> Result<Walk> {
        match self.step {
            None => Ok(Walk::Unit(UnitRangeIter::new(self.start, self.end))),
            Some(step) => SteppedRangeIter::new(self.start, self.end, step)
                .map(Walk::Stepped)
                .with_context(|| format!("Invalid step for range {self}")),
        }
    }
}

impl fmt::Display for ResolvedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)?;
        if let Some(step) = self.step {
            write!(f, " step {step}")?;
        }
        Ok(())
    }
}

/// Either of the two range iterators.
#[derive(Debug, Clone, Copy)]
pub enum Walk {
    Unit(UnitRangeIter<i64>),
    Stepped(SteppedRangeIter<i64>),
}

impl Iterator for Walk {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        match self {
            Walk::Unit(iter) => iter.next(),
            Walk::Stepped(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Walk::Unit(iter) => iter.size_hint(),
            Walk::Stepped(iter) => iter.size_hint(),
        }
    }
}
