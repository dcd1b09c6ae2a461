//! Rendering outcomes as text or JSON.

use std::fmt::{self, Write as _};

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::scenario::Outcome;

/// Renders `outcomes` in the requested format, newline-terminated.
pub fn render(outcomes: &[Outcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(outcomes)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(render_text(outcomes)?),
    }
}

fn render_text(outcomes: &[Outcome]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_outcome(&mut out, outcome)?;
    }
    Ok(out)
}

fn write_outcome(out: &mut String, outcome: &Outcome) -> fmt::Result {
    match outcome {
        Outcome::Stack {
            pushed,
            popped,
            exhausted,
            remaining,
            membership,
        } => {
            writeln!(out, "stack")?;
            writeln!(out, "  pushed:    {pushed:?}")?;
            writeln!(out, "  popped:    {popped:?}")?;
            if *exhausted {
                writeln!(out, "  (stack ran empty before all pops completed)")?;
            }
            writeln!(out, "  remaining: {remaining:?}")?;
            for probe in membership {
                writeln!(out, "  contains {}: {}", probe.value, probe.present)?;
            }
        }
        Outcome::Words {
            kept,
            lengths,
            total,
        } => {
            writeln!(out, "words")?;
            writeln!(out, "  kept:    {kept:?}")?;
            writeln!(out, "  lengths: {lengths:?}")?;
            writeln!(out, "  total:   {total}")?;
        }
        Outcome::Sum { values, total } => {
            writeln!(out, "sum")?;
            writeln!(out, "  values: {values:?}")?;
            writeln!(out, "  total:  {total}")?;
        }
    }
    Ok(())
}
