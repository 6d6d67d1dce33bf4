//! Text helpers shared by the list components.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Write `text` at (x, y), clipped to `area`. Returns the columns used.
pub fn render_text(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, area: Rect) -> u16 {
    if y < area.y || y >= area.bottom() || x >= area.right() {
        return 0;
    }
    let max = (area.right() - x) as usize;
    let (end_x, _) = buf.set_stringn(x, y, text, max, style);
    end_x.saturating_sub(x)
}

/// Display width of a string in columns.
pub fn display_width(text: &str) -> u16 {
    text.width() as u16
}
