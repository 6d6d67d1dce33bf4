//! Application state and the glue between the list, the store and the UI.
//!
//! `App` owns the [`DiscussionList`] view-model, the router and the session.
//! Store calls run on spawned tasks (see `actions`) and come back as
//! [`AppMessage`]s; key and mouse input is handled in `handlers`.

mod actions;
mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, watch};

use crate::config::Config;
use crate::router::HistoryRouter;
use crate::session::Session;
use crate::state::{DiscussionList, ListProps};
use crate::traits::{DiscussionStore, Router};
use crate::ui::{HitAreaRegistry, RenderContext};
use crate::view_state::ListView;

/// Main application state
pub struct App {
    /// The discussion list view-model
    pub list: DiscussionList,
    /// Navigation history
    pub router: HistoryRouter,
    /// Shared login state
    pub session: Session,
    /// Forum root used for "open in browser"
    pub base_url: String,
    /// Index of the selected row
    pub selected: Option<usize>,
    /// Discussion awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Clickable regions from the last frame
    pub hit_areas: HitAreaRegistry,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Whether the next loop iteration should draw
    pub needs_redraw: bool,
    /// Animation tick counter
    pub tick_count: u64,
    /// Receiver for async results; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    store: Arc<dyn DiscussionStore>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    revision_rx: watch::Receiver<u64>,
}

impl App {
    /// Build the app and start the first fetch. Must be called inside a
    /// tokio runtime.
    pub fn new(store: Arc<dyn DiscussionStore>, session: Session, config: &Config) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let refresh_tx = message_tx.clone();
        let (list, ticket) =
            DiscussionList::new(ListProps::for_sort(&config.sort), session.clone(), move || {
                let _ = refresh_tx.send(AppMessage::RefreshRequested);
            });
        let revision_rx = list.subscribe();

        let app = Self {
            list,
            router: HistoryRouter::new(),
            session,
            base_url: config.base_url.clone(),
            selected: None,
            pending_delete: None,
            status_message: None,
            hit_areas: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            store,
            message_tx,
            revision_rx,
        };
        app.spawn_fetch(ticket);
        app
    }

    /// Mark that the UI needs to be redrawn
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Redraws while the spinner is showing.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.list.loading() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// Pick up list revisions published since the last check.
    pub fn sync_revision(&mut self) {
        if self.revision_rx.has_changed().unwrap_or(false) {
            self.revision_rx.borrow_and_update();
            self.clamp_selection();
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Wait for the next async result. Used when the event loop is not
    /// holding the receiver.
    pub async fn recv_message(&mut self) -> Option<AppMessage> {
        self.message_rx.as_mut()?.recv().await
    }

    /// Id of the selected discussion.
    pub fn selected_id(&self) -> Option<String> {
        self.selected
            .and_then(|i| self.list.discussions().get(i))
            .map(|d| d.id.clone())
    }

    /// Keep the selection inside the list, selecting the first row once
    /// rows exist.
    pub fn clamp_selection(&mut self) {
        let len = self.list.len();
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(i)) => Some(i.min(len - 1)),
        };
    }

    /// Build the view for the current frame.
    pub fn view(&self) -> ListView {
        self.list.view(&self.router, Utc::now())
    }

    /// Assemble render input borrowing from `view`.
    pub fn render_context<'a>(&'a self, view: &'a ListView, path: &'a str) -> RenderContext<'a> {
        RenderContext {
            view,
            selected: self.selected,
            current_path: path,
            status_message: self.status_message.as_deref(),
            pending_delete: self
                .pending_delete
                .as_deref()
                .and_then(|id| self.list.get(id))
                .map(|d| d.title.as_str()),
            tick: self.tick_count,
        }
    }

    /// Draw one frame and rebuild the hit areas.
    pub fn draw(&mut self, frame: &mut ratatui::Frame) {
        let view = self.view();
        let path = self.router.current_path();
        let mut registry = std::mem::take(&mut self.hit_areas);
        let ctx = self.render_context(&view, &path);
        crate::ui::render(frame, &ctx, &mut registry);
        self.hit_areas = registry;
    }
}
