//! List footer: loading indicator, Load More button, or fetch error.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};

use super::helpers::{render_text, truncate};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_DANGER, COLOR_DIM};
use crate::view_state::Footer;

pub const LOAD_MORE_LABEL: &str = "[ Load More ]";
pub const RETRY_LABEL: &str = "[ Retry ]";

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Rows the footer needs, zero when there is nothing to show.
pub fn height(footer: &Footer) -> u16 {
    match footer {
        Footer::None => 0,
        _ => 1,
    }
}

/// Render the footer centered in `area`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    footer: &Footer,
    tick: u64,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    let y = area.y;

    match footer {
        Footer::None => {}
        Footer::Loading => {
            let text = format!("{} Loading…", SPINNER[(tick % SPINNER.len() as u64) as usize]);
            let x = centered_x(area, &text);
            render_text(buf, x, y, &text, Style::default().fg(COLOR_DIM), area);
        }
        Footer::LoadMore => {
            let x = centered_x(area, LOAD_MORE_LABEL);
            let style = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
            let w = render_text(buf, x, y, LOAD_MORE_LABEL, style, area);
            registry.register(Rect::new(x, y, w, 1), ClickAction::LoadMore);
        }
        Footer::Failed(reason) => {
            let budget = (area.width as usize).saturating_sub(RETRY_LABEL.len() + 4);
            let message = format!("⚠ {}", truncate(reason, budget.saturating_sub(2)));
            let text = format!("{}  {}", message, RETRY_LABEL);
            let x = centered_x(area, &text);
            let w = render_text(buf, x, y, &message, Style::default().fg(COLOR_DANGER), area);
            let rx = x + w + 2;
            let w = render_text(
                buf,
                rx,
                y,
                RETRY_LABEL,
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                area,
            );
            registry.register(Rect::new(rx, y, w, 1), ClickAction::Retry);
        }
    }
}

fn centered_x(area: Rect, text: &str) -> u16 {
    let width = super::helpers::display_width(text).min(area.width);
    area.x + (area.width - width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(footer: &Footer) -> (String, HitAreaRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let mut registry = HitAreaRegistry::new();
        terminal
            .draw(|f| render(f, Rect::new(0, 0, 40, 1), footer, 0, &mut registry))
            .unwrap();
        let buf = terminal.backend().buffer();
        let line = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        (line, registry)
    }

    #[test]
    fn test_load_more_registers_hit_area() {
        let (line, registry) = draw(&Footer::LoadMore);
        assert!(line.contains(LOAD_MORE_LABEL));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.areas()[0].action, ClickAction::LoadMore);
    }

    #[test]
    fn test_failed_shows_reason_and_retry() {
        let (line, registry) = draw(&Footer::Failed("Connection failed".to_string()));
        assert!(line.contains("Connection failed"));
        assert!(line.contains(RETRY_LABEL));
        assert_eq!(registry.hit_test(registry.areas()[0].rect.x, 0), Some(ClickAction::Retry));
    }

    #[test]
    fn test_loading_has_no_hit_area() {
        let (line, registry) = draw(&Footer::Loading);
        assert!(line.contains("Loading"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_height() {
        assert_eq!(height(&Footer::None), 0);
        assert_eq!(height(&Footer::LoadMore), 1);
    }
}
