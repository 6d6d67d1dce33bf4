//! Bottom status bar: route, sort, tooltip or status message, key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::helpers::{display_width, render_text, truncate};
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub const KEY_HINTS: &str = "j/k move · ⏎ open · r read · d delete · m more · s sort · q quit";

/// Render the status bar. A status message replaces the tooltip.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    route: &str,
    sort_label: &str,
    detail: Option<&str>,
) {
    if area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    let y = area.y;

    let left = format!(" {} · {}", route, sort_label);
    let mut x = area.x;
    x += render_text(
        buf,
        x,
        y,
        &left,
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        area,
    );

    let hints_width = display_width(KEY_HINTS) + 1;
    let hints_fit = area.width > display_width(&left) + hints_width + 10;
    let detail_end = if hints_fit {
        area.right() - hints_width
    } else {
        area.right()
    };

    if let Some(detail) = detail {
        let start = x + 2;
        let detail = truncate(detail, detail_end.saturating_sub(start + 1) as usize);
        render_text(buf, start, y, &detail, Style::default(), area);
    }

    if hints_fit {
        render_text(
            buf,
            area.right() - hints_width,
            y,
            KEY_HINTS,
            Style::default().fg(COLOR_DIM),
            area,
        );
    }
}
