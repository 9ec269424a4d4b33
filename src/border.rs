//! Single-line border rendering.
//!
//! Two primitives: a full-width filler row (top and bottom borders) and a
//! framed body line. Both produce exactly `width` code units plus a
//! trailing newline.

use crate::error::LayoutError;

/// Render a full-width filler row: `left`, then `fill` repeated out to
/// `width`, then `right`, then a newline.
///
/// An empty `fill` is the "omit this row" sentinel and yields an empty
/// string, so a style can skip its top or bottom border entirely.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidFill`] if `fill` is longer than one
/// character, or [`LayoutError::WidthTooSmall`] if `width` cannot hold both
/// markers.
pub fn border_term(
    left: &str,
    right: &str,
    fill: &str,
    width: usize,
) -> Result<String, LayoutError> {
    if fill.is_empty() {
        return Ok(String::new());
    }
    if fill.len() != 1 {
        return Err(LayoutError::InvalidFill(fill.to_string()));
    }

    let need = left.len() + right.len();
    let Some(repeat) = width.checked_sub(need) else {
        return Err(LayoutError::WidthTooSmall { width, need });
    };

    Ok(format!("{left}{}{right}\n", fill.repeat(repeat)))
}

/// Render one framed body line at exactly `width` code units.
///
/// The space left over after the markers and `content` is padded with
/// `fill`: all on the right when left-justified, or split floor-left /
/// remainder-right when `centered`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidFill`] if `fill` is not exactly one
/// character, or [`LayoutError::NoRoom`] if no content space remains
/// between the markers (or `content` itself is too long to fit).
pub fn render_body_line(
    left: &str,
    right: &str,
    fill: &str,
    content: &str,
    width: usize,
    centered: bool,
) -> Result<String, LayoutError> {
    if fill.len() != 1 {
        return Err(LayoutError::InvalidFill(fill.to_string()));
    }

    let room = width.saturating_sub(left.len() + right.len());
    if room == 0 {
        return Err(LayoutError::NoRoom { width });
    }
    let Some(spaces) = room.checked_sub(content.len()) else {
        return Err(LayoutError::NoRoom { width });
    };

    if centered {
        let space_left = spaces / 2;
        let space_right = spaces - space_left;
        Ok(format!(
            "{left}{}{content}{}{right}\n",
            fill.repeat(space_left),
            fill.repeat(space_right)
        ))
    } else {
        Ok(format!("{left}{content}{}{right}\n", fill.repeat(spaces)))
    }
}
