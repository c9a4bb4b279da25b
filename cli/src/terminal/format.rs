use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A full-width horizontal rule.
pub fn draw_line(width: usize) -> String {
    "-".repeat(width)
}

/// A labelled line: `text` centered within `fill` characters, keeping the
/// overall width constant. Odd leftovers go to the right-hand side. Labels
/// wider than the line are returned unpadded rather than truncated.
pub fn draw_line_with_text(width: usize, text: &str, fill: char, color: Option<Color>) -> String {
    let text_width: usize = UnicodeWidthStr::width(text);

    if text_width >= width {
        return colorize(text, color);
    }

    let remaining: usize = width - text_width;
    let left: usize = remaining / 2;
    let right: usize = remaining - left;

    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        colorize(text, color),
        fill.to_string().repeat(right)
    )
}

fn colorize(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}
