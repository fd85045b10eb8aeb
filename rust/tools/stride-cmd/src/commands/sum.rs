//! Sum command implementation

use anyhow::{Context, Result};
use serde::Serialize;

use crate::commands::{RangeArgs, ResolvedRange};

#[derive(Debug, PartialEq, Eq, Serialize)]
struct SumSummary {
    range: ResolvedRange,
    count: u64,
    sum: i128,
}

/// Run the sum command
pub fn run(args: RangeArgs, json: bool) -> Result<()> {
    let range = args.resolve()?;
    let summary = summarize(range)?;

    if json {
        let text = serde_json::to_string_pretty(&summary)
            .with_context(|| "Failed to serialize range summary")?;
        println!("{text}");
    } else {
        println!("Range: {}", summary.range);
        println!("  Count: {}", summary.count);
        println!("  Sum: {}", summary.sum);
    }
    Ok(())
}

fn summarize(range: ResolvedRange) -> Result<SumSummary> {
    let mut count = 0u64;
    let mut sum = 0i128;
    for value in range.walk()? {
        count += 1;
        sum += i128::from(value);
    }
    Ok(SumSummary { range, count, sum })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(start: i64, end: i64, step: Option<i64>) -> (u64, i128) {
        let summary = summarize(ResolvedRange { start, end, step }).unwrap();
        (summary.count, summary.sum)
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summary(0, 100, None), (100, 4950));
        assert_eq!(summary(-100, 0, None), (100, -5050));
        assert_eq!(summary(-100, 100, None), (200, -100));
        assert_eq!(summary(100, -100, None), (0, 0));
        assert_eq!(summary(-100, 100, Some(2)), (100, -100));
        assert_eq!(summary(99, -101, Some(-1)), (200, -100));
    }

    #[test]
    fn test_summarize_wide_values() {
        let (count, sum) = summary(i64::MAX - 2, i64::MAX, None);
        assert_eq!(count, 2);
        assert_eq!(sum, 2 * i128::from(i64::MAX) - 3);
    }

    #[test]
    fn test_summarize_zero_step() {
        assert!(summarize(ResolvedRange {
            start: 0,
            end: 10,
            step: Some(0)
        })
        .is_err());
    }

    #[test]
    fn test_summary_json() {
        let summary = summarize(ResolvedRange {
            start: 0,
            end: 4,
            step: None,
        })
        .unwrap();
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"range":{"start":0,"end":4},"count":4,"sum":6}"#
        );
    }
}
