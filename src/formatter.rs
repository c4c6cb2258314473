//! Fenced-block formatting orchestration.
//!
//! Composes the classifier and the language detector behind three guards:
//! already-fenced text, text below the configured line minimum, and text
//! the classifier rejects all pass through untouched. Only text that
//! clears all three gets wrapped.

use anyhow::{bail, Result};
use serde_json::Value;

use crate::classifier::is_code;
use crate::language::{detect_language, PLAINTEXT};
use crate::settings::{is_truthy, lookup, Setting};

const FENCE: &str = "```";
const DEFAULT_MIN_LINES: i64 = 2;

/// Wrap `text` in a fenced code block when it looks like code.
///
/// Settings consulted: `minLines` (default 2) and `detectLanguage`
/// (default true). Returns the input unchanged when it already contains
/// a fence marker, has too few lines, or fails the classifier vote.
/// Errors only when a present `minLines` value cannot be read as a
/// number; the caller's boundary turns that into an error envelope with
/// the original message preserved.
pub fn format_code_blocks(text: &str, settings: &[Setting]) -> Result<String> {
    let min_lines = resolve_min_lines(settings)?;
    let detect = lookup(settings, "detectLanguage")
        .map(is_truthy)
        .unwrap_or(true);

    // Already fenced — never double-wrap.
    if text.contains(FENCE) {
        return Ok(text.to_string());
    }

    if (text.split('\n').count() as i64) < min_lines {
        return Ok(text.to_string());
    }

    if !is_code(text, min_lines) {
        return Ok(text.to_string());
    }

    let lang = if detect { detect_language(text) } else { PLAINTEXT };
    Ok(format!("{FENCE}{lang}\n{text}\n{FENCE}"))
}

/// Coerce the `minLines` setting to an integer: JSON numbers, booleans,
/// and numeric strings are accepted. A present but non-numeric value is
/// an error, not a silent fallback.
fn resolve_min_lines(settings: &[Setting]) -> Result<i64> {
    let Some(value) = lookup(settings, "minLines") else {
        return Ok(DEFAULT_MIN_LINES);
    };
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f as i64)
            } else {
                bail!("invalid minLines value: {n}")
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("invalid minLines value: {s:?}")),
        other => bail!("invalid minLines value: {other}"),
    }
}
