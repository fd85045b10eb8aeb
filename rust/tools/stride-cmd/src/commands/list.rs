//! List command implementation

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::io::{BufWriter, Write};

use crate::commands::{RangeArgs, ResolvedRange, Walk};

#[derive(Serialize)]
struct ListOutput {
    range: ResolvedRange,
    values: ValueStream,
}

/// Serializes the values of a walk as a JSON array, one element at a time.
struct ValueStream(Walk);

impl Serialize for ValueStream {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0)
    }
}

/// Run the list command
pub fn run(args: RangeArgs, json: bool) -> Result<()> {
    let range = args.resolve()?;
    let mut out = BufWriter::new(std::io::stdout().lock());

    if json {
        write_json(&mut out, range)?;
        writeln!(out).with_context(|| "Failed to write to stdout")?;
    } else {
        for value in range.walk()? {
            writeln!(out, "{value}").with_context(|| "Failed to write to stdout")?;
        }
    }
    out.flush().with_context(|| "Failed to flush stdout")?;
    Ok(())
}

fn write_json<W: Write>(out: W, range: ResolvedRange) -> Result<()> {
    let output = ListOutput {
        range,
        values: ValueStream(range.walk()?),
    };
    serde_json::to_writer_pretty(out, &output).with_context(|| "Failed to write range values")
}
