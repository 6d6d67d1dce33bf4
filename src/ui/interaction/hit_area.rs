//! Hit areas for mouse interaction.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine what action to take on a click.

use ratatui::layout::Rect;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Select a row without acting on it
    SelectRow(usize),
    /// Open a discussion (title link)
    OpenDiscussion(String),
    /// Open the start user's profile (avatar link)
    OpenAuthor(String),
    /// Mark a discussion as read (count click)
    MarkAsRead(String),
    /// Ask to delete a discussion (contextual control)
    DeleteDiscussion(String),
    /// Load the next page
    LoadMore,
    /// Retry after a failed fetch
    Retry,
    /// Confirm the pending delete
    ConfirmDelete,
    /// Dismiss the pending delete
    CancelDelete,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Later registrations win for overlapping regions.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Clear all registered areas. Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Return the action for the topmost hit area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// All registered areas, in registration order.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 5, 20, 2), ClickAction::LoadMore);
        assert!(area.contains(10, 5));
        assert!(area.contains(29, 6));
        assert!(!area.contains(30, 5));
        assert!(!area.contains(10, 7));
        assert!(!area.contains(9, 5));
    }

    #[test]
    fn test_hit_test_prefers_last_registered() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 80, 2), ClickAction::SelectRow(0));
        registry.register(Rect::new(70, 0, 10, 1), ClickAction::MarkAsRead("1".into()));

        assert_eq!(registry.hit_test(75, 0), Some(ClickAction::MarkAsRead("1".into())));
        assert_eq!(registry.hit_test(5, 1), Some(ClickAction::SelectRow(0)));
        assert_eq!(registry.hit_test(5, 5), None);
    }

    #[test]
    fn test_empty_rects_are_ignored() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 0, 1), ClickAction::LoadMore);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 1, 1), ClickAction::Retry);
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
    }
}
