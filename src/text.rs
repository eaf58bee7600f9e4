//! Character-offset range arithmetic over document text.
//!
//! Columns are character offsets within a line; lines are separated by
//! `'\n'`. Positions may sit at the very end of a line (one past the last
//! character), which is where half-open end positions land.

use crate::types::{Position, Range};

/// Absolute character offset of `pos`, or `None` if the document is too
/// short or the line too narrow.
fn offset_of(text: &str, pos: Position) -> Option<usize> {
    let mut chars = text.chars();
    let mut offset = 0usize;

    let mut remaining_lines = pos.line;
    while remaining_lines > 0 {
        match chars.next() {
            Some('\n') => {
                offset += 1;
                remaining_lines -= 1;
            }
            Some(_) => offset += 1,
            None => return None,
        }
    }

    // Advance within the line without crossing its end.
    for _ in 0..pos.column {
        match chars.next() {
            Some('\n') | None => return None,
            Some(_) => offset += 1,
        }
    }
    Some(offset)
}

/// Extract the live text occupying `range`.
pub(crate) fn slice_range(text: &str, range: Range) -> Option<String> {
    let start = offset_of(text, range.start)?;
    let end = offset_of(text, range.end)?;
    if end < start {
        return None;
    }
    Some(text.chars().skip(start).take(end - start).collect())
}

/// Produce the document text resulting from one range-replacement edit.
pub(crate) fn replace_range(text: &str, range: Range, replacement: &str) -> Option<String> {
    let start = offset_of(text, range.start)?;
    let end = offset_of(text, range.end)?;
    if end < start {
        return None;
    }
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.extend(text.chars().take(start));
    out.push_str(replacement);
    out.extend(text.chars().skip(end));
    Some(out)
}
