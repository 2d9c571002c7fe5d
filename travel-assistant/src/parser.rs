//! Parsing of the extraction model's reply.
//!
//! The extraction prompt asks for either the sentinel `OutOfContext` or
//! three `Label: value` lines in the order origin, destination, mode:
//!
//! ```text
//! Origin: Boston
//! Destination: New York
//! Mode: driving
//! ```
//!
//! Values of `None` mark fields the user did not mention.

use crate::domain::{ExtractionResult, TripField, TripQuery};

/// Sentinel the model returns for queries unrelated to travel duration.
pub const OUT_OF_CONTEXT: &str = "OutOfContext";

/// Placeholder the model returns for a missing value.
pub const MISSING_PLACEHOLDER: &str = "None";

/// The model's reply did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedExtraction {
    /// Fewer than three non-blank lines.
    #[error("expected 3 lines (origin, destination, mode), got {0}")]
    TooFewLines(usize),

    /// A line with no `:` separator.
    #[error("line {line} has no ':' separator: {text:?}")]
    MissingSeparator { line: usize, text: String },
}

/// Parse the extraction model's reply.
///
/// This is a pure function of `raw`. Blank lines are skipped, as is any
/// preamble before the first `Origin:`, `Destination:` or `Mode:` line.
/// Lines past the third are ignored, and each value is the trimmed text
/// after the first colon on its line.
pub fn parse(raw: &str) -> Result<ExtractionResult, MalformedExtraction> {
    let raw = raw.trim();

    if is_out_of_context(raw) {
        return Ok(ExtractionResult::OutOfContext);
    }

    let non_blank: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    // Without any known label, fall back to plain line order.
    let start = non_blank
        .iter()
        .position(|l| has_known_label(l))
        .unwrap_or(0);
    let lines: Vec<&str> = non_blank.into_iter().skip(start).take(3).collect();

    if lines.len() < 3 {
        return Err(MalformedExtraction::TooFewLines(lines.len()));
    }

    let origin = parse_field(1, lines[0])?;
    let destination = parse_field(2, lines[1])?;
    let mode = parse_field(3, lines[2])?;

    Ok(ExtractionResult::Trip(TripQuery {
        origin,
        destination,
        mode,
    }))
}

/// The sentinel, possibly quoted and possibly followed by a period, on either
/// side of the quotes.
fn is_out_of_context(raw: &str) -> bool {
    let period_outside = strip_quotes(raw.strip_suffix('.').unwrap_or(raw));
    let unquoted = strip_quotes(raw);
    let period_inside = unquoted.strip_suffix('.').unwrap_or(unquoted);

    period_outside == OUT_OF_CONTEXT || period_inside == OUT_OF_CONTEXT
}

/// Labels the extraction prompt asks for, in order.
const LABELS: [&str; 3] = ["origin", "destination", "mode"];

/// Whether `line` starts with one of the expected labels, ignoring list
/// markers and case.
fn has_known_label(line: &str) -> bool {
    let Some((label, _)) = line.split_once(':') else {
        return false;
    };
    let label = label.trim_start_matches(['-', '*', ' ']).trim();
    LABELS.iter().any(|known| label.eq_ignore_ascii_case(known))
}

/// Parse one `Label: value` line. `line` is 1-based, for error messages.
fn parse_field(line: usize, text: &str) -> Result<TripField, MalformedExtraction> {
    let (_label, value) = text
        .split_once(':')
        .ok_or_else(|| MalformedExtraction::MissingSeparator {
            line,
            text: text.to_string(),
        })?;

    let value = strip_quotes(value.trim()).trim();

    if is_placeholder(value) {
        Ok(TripField::Missing)
    } else {
        Ok(TripField::Value(value.to_string()))
    }
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty()
        || value.eq_ignore_ascii_case(MISSING_PLACEHOLDER)
        || value.eq_ignore_ascii_case("null")
        || value.eq_ignore_ascii_case("n/a")
}

/// Strip one pair of matching surrounding quotes.
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}
