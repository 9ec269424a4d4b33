//! Comment block assembly.

use crate::border::{border_term, render_body_line};
use crate::error::LayoutError;
use crate::style::CommentStyle;
use crate::wrap::wrap;

/// Assemble a full comment block: top border, wrapped and framed body
/// lines, bottom border.
///
/// `text` is expected to end with a newline; each of its lines is wrapped
/// independently to the room left between the mid markers. When `centered`,
/// lines are trimmed of leading whitespace first so indentation does not
/// bias the centering.
///
/// # Errors
///
/// Propagates any [`LayoutError`] from wrapping or rendering unchanged; in
/// particular a `width` too small for the style's markers fails rather
/// than producing truncated output.
pub fn assemble(
    style: &CommentStyle,
    text: &str,
    width: usize,
    centered: bool,
) -> Result<String, LayoutError> {
    let mut out = border_term(style.top.left, style.top.right, style.top.fill, width)?;

    let room = width.saturating_sub(style.mid.left.len() + style.mid.right.len());
    for line in text.lines() {
        let line = if centered { line.trim_start() } else { line };
        for segment in wrap(line, room)? {
            out.push_str(&render_body_line(
                style.mid.left,
                style.mid.right,
                style.mid.fill,
                &segment,
                width,
                centered,
            )?);
        }
    }

    out.push_str(&border_term(style.bot.left, style.bot.right, style.bot.fill, width)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleId;

    #[test]
    fn test_block_left_justified() {
        let block = StyleId::Block.style();
        let out = assemble(&block, "hello world\n", 20, false).unwrap();
        // Top: "/*" + 16 fill + "**"; bottom: "**" + 16 fill + "*/".
        let expected = format!("/*{0}**\n* hello world      *\n**{0}*/\n", "*".repeat(16));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_block_centered() {
        let block = StyleId::Block.style();
        let out = assemble(&block, "hi\n", 20, true).unwrap();
        // room = 16, spaces = 14: 7 left, 7 right.
        let body = format!("* {}hi{} *", " ".repeat(7), " ".repeat(7));
        assert_eq!(out.lines().nth(1).unwrap(), body);
    }

    #[test]
    fn test_every_rendered_line_is_uniform_width() {
        let hash = StyleId::Hash.style();
        let out = assemble(&hash, "the quick brown fox jumps over the lazy dog\n", 24, true)
            .unwrap();
        for line in out.lines() {
            assert_eq!(line.len(), 24, "ragged line: {line:?}");
        }
    }

    #[test]
    fn test_blank_line_renders_one_blank_row() {
        let block = StyleId::Block.style();
        let out = assemble(&block, "a\n   \nb\n", 10, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], format!("* {} *", " ".repeat(6)));
    }

    #[test]
    fn test_centering_ignores_indentation() {
        let block = StyleId::Block.style();
        let indented = assemble(&block, "    hi\n", 20, true).unwrap();
        let flush = assemble(&block, "hi\n", 20, true).unwrap();
        assert_eq!(indented, flush);
    }

    #[test]
    fn test_indentation_kept_when_left_justified() {
        let block = StyleId::Block.style();
        let out = assemble(&block, "  hi\n", 20, false).unwrap();
        // "  hi" keeps its indent; 12 fill spaces pad out to the marker.
        assert_eq!(out.lines().nth(1).unwrap(), format!("*   hi{} *", " ".repeat(12)));
    }

    #[test]
    fn test_long_input_wraps() {
        let dash = StyleId::Dash.style();
        let out = assemble(&dash, "alpha beta gamma delta\n", 16, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        // room = 16 - 3 - 3 = 10: "alpha beta" fits exactly, then one
        // word per line.
        assert_eq!(lines, vec![
            "----------------",
            "-- alpha beta --",
            "-- gamma      --",
            "-- delta      --",
            "----------------",
        ]);
    }

    #[test]
    fn test_multibyte_body_renders() {
        let block = StyleId::Block.style();
        let out = assemble(&block, "héllo wörld\n", 20, false).unwrap();
        // 13 bytes of content in a 16-byte room: 3 fill spaces.
        assert_eq!(out.lines().nth(1).unwrap(), "* héllo wörld    *");
    }

    #[test]
    fn test_multibyte_oversized_word_renders() {
        let block = StyleId::Block.style();
        // room = 6: the 38-byte word chunks into three-char (6-byte) rows.
        let out = assemble(&block, &format!("{}\n", "α".repeat(19)), 10, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "* ααα *");
        assert_eq!(lines[7], "* α     *");
    }

    #[test]
    fn test_width_too_small_propagates() {
        let block = StyleId::Block.style();
        // Mid markers alone consume the width: wrapping room is zero.
        assert_eq!(
            assemble(&block, "hi\n", 4, false),
            Err(LayoutError::InvalidWidth)
        );
        // Top markers don't even fit.
        assert_eq!(
            assemble(&block, "hi\n", 3, false),
            Err(LayoutError::WidthTooSmall { width: 3, need: 4 })
        );
    }
}
