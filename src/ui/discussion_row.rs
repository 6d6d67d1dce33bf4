//! Discussion row component
//!
//! Renders a single discussion as a two-line row:
//!
//! ```text
//! ▌(T) [Sticky] Welcome to the forum                       7 unread  [x]
//!      toby replied 5 minutes ago
//! ```
//!
//! The marker column shows the active discussion, the avatar links to the
//! author, the title links to the discussion near its first unread post,
//! the count marks the discussion read, and `[x]` is the delete control.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::helpers::{display_width, render_text, truncate};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{
    COLOR_ACTIVE, COLOR_AVATAR, COLOR_BADGE, COLOR_DANGER, COLOR_DIM, COLOR_SELECTED_BG,
    COLOR_UNREAD,
};
use crate::view_state::{ControlItem, CountLabel, RowView};
use chrono::{DateTime, Utc};

/// Lines per row
pub const ROW_HEIGHT: u16 = 2;

/// Columns before the title: marker + avatar + gap
const LEAD_WIDTH: u16 = 5;

/// Minimum width needed to draw a row at all
const MIN_WIDTH: u16 = 20;

/// Render a single discussion row and register its hit areas.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    row: &RowView,
    index: usize,
    selected: bool,
    now: DateTime<Utc>,
    registry: &mut HitAreaRegistry,
) {
    if area.height < 1 || area.width < MIN_WIDTH {
        return;
    }

    registry.register(area, ClickAction::SelectRow(index));

    let base = if selected {
        Style::default().bg(COLOR_SELECTED_BG)
    } else {
        Style::default()
    };
    let buf = frame.buffer_mut();
    if selected {
        buf.set_style(area, base);
    }

    let y = area.y;
    let mut x = area.x;

    // Active marker
    if row.active {
        render_text(buf, x, y, "▌", base.fg(COLOR_ACTIVE), area);
    }
    x += 1;

    // Avatar
    if let Some(author) = &row.author {
        let avatar = format!("({})", author.initial);
        let w = render_text(buf, x, y, &avatar, base.fg(COLOR_AVATAR), area);
        registry.register(
            Rect::new(x, y, w, 1),
            ClickAction::OpenAuthor(row.id.clone()),
        );
    }
    x = area.x + LEAD_WIDTH;

    // Right side: count then controls, right-aligned
    let controls_text = controls_text(&row.controls);
    let count_text = format!("{} {}", row.count.text, row.count.label.as_str());
    let controls_width = display_width(&controls_text);
    let count_width = display_width(&count_text);
    let right_width = count_width + if controls_width > 0 { controls_width + 2 } else { 0 };
    let right_x = area.right().saturating_sub(right_width + 1);

    let count_style = if row.count.label == CountLabel::Unread {
        base.fg(COLOR_UNREAD).add_modifier(Modifier::BOLD)
    } else {
        base.fg(COLOR_DIM)
    };
    if right_x > x {
        let w = render_text(buf, right_x, y, &count_text, count_style, area);
        registry.register(
            Rect::new(right_x, y, w, 1),
            ClickAction::MarkAsRead(row.id.clone()),
        );
        if controls_width > 0 {
            let cx = right_x + count_width + 2;
            let w = render_text(buf, cx, y, &controls_text, base.fg(COLOR_DANGER), area);
            if row.controls.contains(&ControlItem::Delete) {
                registry.register(
                    Rect::new(cx, y, w, 1),
                    ClickAction::DeleteDiscussion(row.id.clone()),
                );
            }
        }
    }
    let text_limit = right_x.saturating_sub(1).max(x);

    // Badges
    for badge in &row.badges {
        let label = format!("[{}] ", badge.label);
        if x + display_width(&label) >= text_limit {
            break;
        }
        x += render_text(buf, x, y, &label, base.fg(COLOR_BADGE), area);
    }

    // Title
    let title_style = if row.unread {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    };
    let title = truncate(&row.title, text_limit.saturating_sub(x) as usize);
    let w = render_text(buf, x, y, &title, title_style, area);
    registry.register(
        Rect::new(x, y, w, 1),
        ClickAction::OpenDiscussion(row.id.clone()),
    );

    // Info line
    if area.height >= 2 {
        let info = row
            .info
            .iter()
            .map(|item| item.text(now))
            .collect::<Vec<_>>()
            .join(" · ");
        let ix = area.x + LEAD_WIDTH;
        let info = truncate(&info, area.right().saturating_sub(ix) as usize);
        render_text(buf, ix, y + 1, &info, base.fg(COLOR_DIM), area);
    }
}

/// Text for a row's contextual controls, e.g. "[x]".
fn controls_text(controls: &[ControlItem]) -> String {
    controls
        .iter()
        .map(|c| format!("[{}]", c.icon()))
        .collect::<Vec<_>>()
        .join(" ")
}
