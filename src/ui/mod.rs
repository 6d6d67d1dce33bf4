//! Terminal rendering for the discussion list.
//!
//! Rendering is a pure function of [`RenderContext`]: the app builds a
//! [`ListView`] from the list state and hands it over together with the
//! selection and status line. Clickable regions are collected into a
//! [`HitAreaRegistry`] which the app queries on mouse clicks.
//!
//! ```text
//! ╭ Discussions · Recent ─────────────────────────────────────────╮
//! │▌(T) [Sticky] Welcome                           7 unread  [x]  │
//! │     toby replied 5 minutes ago                                │
//! │              [ Load More ]                                    │
//! ╰───────────────────────────────────────────────────────────────╯
//!  / · Recent        Started by toby 3 days ago        j/k move …
//! ```

pub mod confirm_dialog;
pub mod discussion_list;
pub mod discussion_row;
pub mod footer;
pub mod helpers;
pub mod interaction;
pub mod status_bar;
pub mod theme;

pub use interaction::{ClickAction, HitArea, HitAreaRegistry};

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::view_state::ListView;
use theme::{COLOR_ACCENT, COLOR_BORDER};

/// Everything one frame needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub view: &'a ListView,
    pub selected: Option<usize>,
    pub current_path: &'a str,
    /// Transient message; replaces the selected row's tooltip.
    pub status_message: Option<&'a str>,
    /// Title of the discussion awaiting delete confirmation.
    pub pending_delete: Option<&'a str>,
    /// Animation counter for the loading spinner.
    pub tick: u64,
}

impl RenderContext<'_> {
    fn status_detail(&self) -> Option<&str> {
        self.status_message.or_else(|| {
            self.selected
                .and_then(|i| self.view.rows.get(i))
                .and_then(|row| row.author.as_ref())
                .map(|author| author.tooltip.as_str())
        })
    }
}

/// Render a full frame and rebuild `registry` for it.
pub fn render(frame: &mut Frame, ctx: &RenderContext, registry: &mut HitAreaRegistry) {
    registry.clear();

    let [body, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    let block = Block::default()
        .title(Span::styled(
            format!(" Discussions · {} ", ctx.view.sort_label),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    discussion_list::render(frame, inner, ctx.view, ctx.selected, ctx.tick, registry);
    status_bar::render(
        frame,
        status,
        ctx.current_path,
        &ctx.view.sort_label,
        ctx.status_detail(),
    );

    if let Some(title) = ctx.pending_delete {
        confirm_dialog::render(frame, title, registry);
    }
}
