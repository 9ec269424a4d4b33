//! Text utilities

/// Expand tabs to spaces using `tab_width`-column tab stops.
///
/// Column tracking resets at each newline. A `tab_width` of zero simply
/// strips tabs.
#[must_use]
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;

    for ch in text.chars() {
        match ch {
            '\t' => {
                if tab_width > 0 {
                    let pad = tab_width - (column % tab_width);
                    out.push_str(&" ".repeat(pad));
                    column += pad;
                }
            }
            '\n' => {
                out.push('\n');
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }

    out
}
