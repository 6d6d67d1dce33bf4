//! In-memory history router.

use tracing::debug;

use crate::traits::Router;

/// Route shown when the history is empty.
pub const INDEX_ROUTE: &str = "/";

/// History stack of visited paths. The last entry is the current path.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    history: Vec<String>,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self {
            history: vec![INDEX_ROUTE.to_string()],
        }
    }

    /// Number of entries in the history, including the index route.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> String {
        self.history
            .last()
            .cloned()
            .unwrap_or_else(|| INDEX_ROUTE.to_string())
    }

    fn navigate(&mut self, path: &str) {
        if self.history.last().map(String::as_str) == Some(path) {
            return;
        }
        debug!("Navigate: {}", path);
        self.history.push(path.to_string());
    }

    fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        debug!("Back: {}", self.current_path());
        true
    }
}
