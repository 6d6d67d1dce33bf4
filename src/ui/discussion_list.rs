//! Scrolling list of discussion rows with the footer below.

use ratatui::{
    layout::Rect,
    style::Style,
    Frame,
};

use super::discussion_row::{self, ROW_HEIGHT};
use super::footer;
use super::helpers::render_text;
use super::interaction::HitAreaRegistry;
use super::theme::COLOR_DIM;
use crate::view_state::{Footer, ListView};

/// Index of the first visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: Option<usize>, capacity: usize) -> usize {
    match selected {
        Some(selected) if capacity > 0 && selected >= capacity => selected + 1 - capacity,
        _ => 0,
    }
}

/// How many rows fit in `height` lines.
pub fn row_capacity(height: u16) -> usize {
    (height / ROW_HEIGHT) as usize
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ListView,
    selected: Option<usize>,
    tick: u64,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let footer_height = footer::height(&view.footer);
    let rows_height = area.height.saturating_sub(footer_height);

    let mut y = area.y;
    if view.is_empty() && view.footer != Footer::Loading {
        render_text(
            frame.buffer_mut(),
            area.x + 1,
            y,
            "No discussions.",
            Style::default().fg(COLOR_DIM),
            area,
        );
        y += 1;
    }

    let capacity = row_capacity(area.bottom().saturating_sub(y).saturating_sub(footer_height));
    let offset = scroll_offset(selected, capacity);
    for (index, row) in view.rows.iter().enumerate().skip(offset).take(capacity) {
        let row_area = Rect::new(area.x, y, area.width, ROW_HEIGHT);
        discussion_row::render(
            frame,
            row_area,
            row,
            index,
            selected == Some(index),
            view.now,
            registry,
        );
        y += ROW_HEIGHT;
    }

    if footer_height > 0 && rows_height < area.height {
        // Footer sits right under the last row when the list is short.
        let footer_y = if view.rows.len() < capacity { y } else { area.y + rows_height };
        let footer_area = Rect::new(area.x, footer_y, area.width, footer_height);
        footer::render(frame, footer_area, &view.footer, tick, registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(3), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(9), 5), 5);
        assert_eq!(scroll_offset(Some(3), 0), 0);
    }

    #[test]
    fn test_row_capacity() {
        assert_eq!(row_capacity(0), 0);
        assert_eq!(row_capacity(5), 2);
        assert_eq!(row_capacity(20), 10);
    }
}
