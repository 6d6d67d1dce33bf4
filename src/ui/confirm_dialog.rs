//! Delete confirmation overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use super::helpers::{render_text, truncate};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DANGER, COLOR_DIM};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this discussion?";

const YES_LABEL: &str = "[ y Yes ]";
const NO_LABEL: &str = "[ n No ]";

/// Render the centered dialog for deleting `title`. Registered last, so its
/// buttons win over the rows underneath.
pub fn render(frame: &mut Frame, title: &str, registry: &mut HitAreaRegistry) {
    let area = frame.area();
    let width = 56u16.min(area.width.saturating_sub(4));
    let height = 6u16.min(area.height);
    if width < 10 || height < 4 {
        return;
    }

    let dialog = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(
            " Delete ",
            Style::default().fg(COLOR_DANGER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, dialog);
    // The dialog swallows clicks that miss its buttons.
    registry.register(dialog, ClickAction::CancelDelete);

    let inner = Rect {
        x: dialog.x + 2,
        y: dialog.y + 1,
        width: dialog.width.saturating_sub(4),
        height: dialog.height.saturating_sub(2),
    };
    let buf = frame.buffer_mut();
    let max = inner.width as usize;

    render_text(buf, inner.x, inner.y, &truncate(DELETE_PROMPT, max), Style::default(), inner);
    render_text(
        buf,
        inner.x,
        inner.y + 1,
        &truncate(title, max),
        Style::default().fg(COLOR_DIM),
        inner,
    );

    let y = inner.bottom().saturating_sub(1);
    let w = render_text(
        buf,
        inner.x,
        y,
        YES_LABEL,
        Style::default().fg(COLOR_DANGER).add_modifier(Modifier::BOLD),
        inner,
    );
    registry.register(Rect::new(inner.x, y, w, 1), ClickAction::ConfirmDelete);

    let nx = inner.x + w + 2;
    let w = render_text(buf, nx, y, NO_LABEL, Style::default().fg(COLOR_ACCENT), inner);
    registry.register(Rect::new(nx, y, w, 1), ClickAction::CancelDelete);
}
