//! Width-constrained line wrapping over whitespace tokens.

use crate::error::LayoutError;
use crate::token::tokenize;

/// Wrap a single line of text to `max_width`, breaking at word boundaries.
///
/// The line is trimmed of trailing whitespace first. Interior whitespace
/// runs are preserved as-is unless they straddle a wrap boundary, in which
/// case they are discarded rather than carried to the next line. A token
/// longer than `max_width` is force-split into `max_width`-sized chunks,
/// each emitted as its own line; chunks are cut at char boundaries, so a
/// multibyte chunk may come up short of the width but never splits a char.
///
/// An empty (or whitespace-only) line yields a single empty string, so a
/// blank body line still renders as one blank decorated line.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidWidth`] if `max_width` is zero.
pub fn wrap(line: &str, max_width: usize) -> Result<Vec<String>, LayoutError> {
    if max_width == 0 {
        return Err(LayoutError::InvalidWidth);
    }

    let line = line.trim_end();
    if line.is_empty() {
        return Ok(vec![String::new()]);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for token in tokenize(line) {
        if current.len() + token.len() > max_width {
            if !current.is_empty() {
                lines.push(current.trim_end().to_string());
                current.clear();
            }
            // Whitespace straddling the wrap boundary is dropped, not
            // carried to the next line.
            if token.chars().all(char::is_whitespace) {
                continue;
            }
        }

        if token.len() > max_width {
            // Oversized word: emit width-sized chunks directly, bypassing
            // the accumulator, cutting at the last char boundary at or
            // before the width. The final short chunk is a line of its own.
            let mut rest = token.as_str();
            while rest.len() > max_width {
                let mut cut = max_width;
                while cut > 0 && !rest.is_char_boundary(cut) {
                    cut -= 1;
                }
                if cut == 0 {
                    // A single char wider than the whole width still gets
                    // its own line rather than splitting mid-char.
                    cut = rest.chars().next().map_or(rest.len(), char::len_utf8);
                }
                lines.push(rest[..cut].to_string());
                rest = &rest[cut..];
            }
            if !rest.is_empty() {
                lines.push(rest.to_string());
            }
        } else {
            current.push_str(&token);
        }
    }

    // The final flush is intentionally not trimmed, matching the mid-stream
    // trim / final no-trim split of the accumulation loop.
    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}
