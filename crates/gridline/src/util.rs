//! Display-width measurement and truncation for cell text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Returns the display width of a string in character cells.
///
/// CJK characters count as two cells, combining marks as zero.
///
/// ```
/// use gridline::util::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates a string from the end to fit within `max_width` cells.
///
/// Strings that fit are returned unchanged. Otherwise the result ends in
/// [`ELLIPSIS`] and its display width is at most `max_width`.
///
/// ```
/// use gridline::util::truncate_end;
///
/// assert_eq!(truncate_end("Hello", 10), "Hello");
/// assert_eq!(truncate_end("Hello World", 6), "Hello…");
/// ```
pub fn truncate_end(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut result = String::new();
    let mut current = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push(ELLIPSIS);
    result
}

/// Number of character cells that fit in `pixels`, given an average glyph
/// width and horizontal padding.
pub fn cells_for_pixels(pixels: u32, glyph_width: f32, padding: u32) -> usize {
    if glyph_width <= 0.0 {
        return usize::MAX;
    }
    let usable = pixels.saturating_sub(padding) as f32;
    (usable / glyph_width).floor() as usize
}
