//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::state::{next_sort_key, prev_sort_key, ListProps, ListStatus};
use crate::traits::Router;
use crate::ui::ClickAction;

use super::{App, AppMessage};

impl App {
    // ========================================================================
    // Async results
    // ========================================================================

    /// Apply a result from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::DiscussionsLoaded { ticket, page } => {
                if self.list.parse_results(&ticket, page) {
                    self.clamp_selection();
                }
            }
            AppMessage::DiscussionsFailed { ticket, error } => {
                self.list.fail(&ticket, error);
            }
            AppMessage::RefreshRequested => {
                info!("Session logged in, refreshing discussions");
                self.refresh();
            }
            AppMessage::DiscussionSaved(discussion) => {
                self.list.apply_saved(discussion);
            }
            AppMessage::SaveFailed {
                discussion_id,
                error,
            } => {
                self.status_message =
                    Some(format!("Could not mark discussion {} read: {}", discussion_id, error));
            }
            AppMessage::DiscussionDeleted { discussion_id } => {
                debug!("Delete of {} confirmed by store", discussion_id);
            }
            AppMessage::DeleteFailed {
                discussion_id,
                error,
            } => {
                self.status_message =
                    Some(format!("Could not delete discussion {}: {}", discussion_id, error));
            }
        }
    }

    // ========================================================================
    // Intents
    // ========================================================================

    pub fn refresh(&mut self) {
        self.selected = None;
        let ticket = self.list.refresh();
        self.spawn_fetch(ticket);
    }

    /// Fetch the next page when the server offered one and no fetch is
    /// already running.
    pub fn load_more(&mut self) {
        if !self.list.more_results() {
            debug!("Load more skipped, no more results");
            return;
        }
        self.fetch_next_page();
    }

    fn fetch_next_page(&mut self) {
        match self.list.load_more() {
            Some(ticket) => self.spawn_fetch(ticket),
            None => debug!("Load more skipped"),
        }
    }

    /// After a failure, retry the page that failed.
    pub fn retry(&mut self) {
        if !matches!(self.list.status(), ListStatus::Failed(_)) {
            return;
        }
        if self.list.is_empty() {
            self.refresh();
        } else {
            self.fetch_next_page();
        }
    }

    /// Switch to the next (or previous) sort and start over.
    pub fn cycle_sort(&mut self, forward: bool) {
        let key = if forward {
            next_sort_key(self.list.sort())
        } else {
            prev_sort_key(self.list.sort())
        };
        info!("Sort changed to {}", key);
        self.selected = None;
        let ticket = self.list.set_props(ListProps::for_sort(key));
        self.spawn_fetch(ticket);
    }

    pub fn select_next(&mut self) {
        let len = self.list.len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    pub fn select_previous(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Navigate to a discussion near its first unread post.
    pub fn open_discussion(&mut self, discussion_id: &str) {
        let Some(discussion) = self.list.get(discussion_id) else {
            return;
        };
        let route = self
            .router
            .route_discussion_near(discussion, discussion.jump_to());
        self.router.navigate(&route);
    }

    /// Navigate to the start user's profile.
    pub fn open_author(&mut self, discussion_id: &str) {
        let route = self
            .list
            .get(discussion_id)
            .and_then(|d| d.start_user.as_ref())
            .map(|u| self.router.route_user(u));
        if let Some(route) = route {
            self.router.navigate(&route);
        }
    }

    /// Open the discussion's page on the forum in the system browser.
    pub fn open_in_browser(&mut self, discussion_id: &str) {
        let Some(discussion) = self.list.get(discussion_id) else {
            return;
        };
        let url = format!(
            "{}{}",
            self.base_url,
            self.router
                .route_discussion_near(discussion, discussion.jump_to())
        );
        if let Err(e) = webbrowser::open(&url) {
            warn!("Failed to open browser for {}: {}", url, e);
            self.status_message = Some(format!("Could not open browser: {}", e));
        }
    }

    pub fn mark_as_read(&mut self, discussion_id: &str) {
        if let Some(update) = self.list.mark_as_read(discussion_id) {
            self.spawn_save(update);
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, discussion_id: &str) {
        let can_delete = self
            .list
            .get(discussion_id)
            .is_some_and(|d| d.can_delete);
        if can_delete {
            self.pending_delete = Some(discussion_id.to_string());
        }
    }

    /// Resolve the pending delete. Declining changes nothing.
    pub fn resolve_delete(&mut self, confirmed: bool) {
        let Some(discussion_id) = self.pending_delete.take() else {
            return;
        };
        if let Some(outcome) = self.list.delete(&discussion_id, confirmed, &mut self.router) {
            self.clamp_selection();
            self.spawn_delete(outcome.discussion_id);
        }
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.pending_delete.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.resolve_delete(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.resolve_delete(false)
                }
                _ => {}
            }
            return;
        }

        self.status_message = None;
        let selected = self.selected_id();

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Esc => {
                self.router.back();
            }
            KeyCode::Char('m') => {
                if matches!(self.list.status(), ListStatus::Failed(_)) {
                    self.retry()
                } else {
                    self.load_more()
                }
            }
            KeyCode::Char('s') => self.cycle_sort(true),
            KeyCode::Char('S') => self.cycle_sort(false),
            KeyCode::Char('R') => self.refresh(),
            KeyCode::Enter => {
                if let Some(id) = selected {
                    self.open_discussion(&id);
                }
            }
            KeyCode::Char('r') => {
                if let Some(id) = selected {
                    self.mark_as_read(&id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = selected {
                    self.request_delete(&id);
                }
            }
            KeyCode::Char('o') => {
                if let Some(id) = selected {
                    self.open_in_browser(&id);
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Dispatch a left click at (x, y) through the last frame's hit areas.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        let Some(action) = self.hit_areas.hit_test(x, y) else {
            return;
        };
        debug!("Click at ({}, {}): {:?}", x, y, action);
        self.mark_dirty();

        if self.pending_delete.is_some() {
            match action {
                ClickAction::ConfirmDelete => self.resolve_delete(true),
                ClickAction::CancelDelete => self.resolve_delete(false),
                _ => {}
            }
            return;
        }

        match action {
            ClickAction::SelectRow(index) => self.selected = Some(index),
            ClickAction::OpenDiscussion(id) => {
                self.select_id(&id);
                self.open_discussion(&id);
            }
            ClickAction::OpenAuthor(id) => self.open_author(&id),
            ClickAction::MarkAsRead(id) => self.mark_as_read(&id),
            ClickAction::DeleteDiscussion(id) => {
                self.select_id(&id);
                self.request_delete(&id);
            }
            ClickAction::LoadMore => self.load_more(),
            ClickAction::Retry => self.retry(),
            ClickAction::ConfirmDelete | ClickAction::CancelDelete => {}
        }
    }

    fn select_id(&mut self, discussion_id: &str) {
        if let Some(index) = self
            .list
            .discussions()
            .iter()
            .position(|d| d.id == discussion_id)
        {
            self.selected = Some(index);
        }
    }
}
