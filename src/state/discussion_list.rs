//! Discussion list view-model.
//!
//! Owns the list state (status, rows, sort, pagination flag) and turns
//! user intents into [`FetchTicket`]s, [`ReadUpdate`]s and
//! [`DeleteOutcome`]s for the caller to execute against a store. Results
//! come back through [`DiscussionList::parse_results`] /
//! [`DiscussionList::fail`].
//!
//! Every logical state transition is applied inside one batch and bumps the
//! revision published on a `watch` channel exactly once, so observers redraw
//! once per transition rather than once per field write.
//!
//! Overlapping fetches: `refresh` starts a new generation and responses to
//! older tickets are dropped; `load_more` is refused while a fetch is
//! outstanding.

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::item_list::ItemList;
use super::sort::{resolve_sort_param, sort_label, CountType, TerminalPostType, DEFAULT_SORT};
use crate::models::{Discussion, DiscussionPage, DiscussionQuery};
use crate::session::{HandlerId, Session, SessionEvent};
use crate::traits::Router;
use crate::view_state::{
    abbreviate_number, human_time, AuthorView, ControlItem, CountLabel, CountView, Footer,
    InfoItem, ListView, RowView,
};

// ============================================================================
// Props and state
// ============================================================================

/// Properties the host passes in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProps {
    pub sort: Option<String>,
    pub count_type: Option<CountType>,
    pub terminal_post_type: Option<TerminalPostType>,
}

impl ListProps {
    /// Props the index page passes for a sort: the sort itself plus the
    /// count and terminal-post modes derived from it.
    pub fn for_sort(sort: &str) -> Self {
        Self {
            sort: Some(sort.to_string()),
            count_type: Some(CountType::for_sort(sort)),
            terminal_post_type: Some(TerminalPostType::for_sort(sort)),
        }
    }
}

/// Fetch lifecycle of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub status: ListStatus,
    pub more_results: bool,
    pub discussions: Vec<Discussion>,
    pub sort: String,
}

/// Handle for one outstanding fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub query: DiscussionQuery,
    pub generation: u64,
    pub append: bool,
}

/// A read-number save to send to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadUpdate {
    pub discussion_id: String,
    pub read_number: u32,
}

/// Result of a confirmed delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Discussion to delete through the store.
    pub discussion_id: String,
    /// Whether the list held the discussion and removed it.
    pub removed: bool,
    /// Whether the router went back because the deleted discussion was open.
    pub navigated_back: bool,
}

// ============================================================================
// DiscussionList
// ============================================================================

pub struct DiscussionList {
    props: ListProps,
    state: ListState,
    generation: u64,
    revision: watch::Sender<u64>,
    session: Session,
    logged_in_handler: Option<HandlerId>,
}

impl std::fmt::Debug for DiscussionList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscussionList")
            .field("props", &self.props)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

impl DiscussionList {
    /// Create the list and issue the initial fetch.
    ///
    /// `on_logged_in` is registered on the session's `loggedIn` event and
    /// should request a refresh from whoever drives the list.
    pub fn new<F>(props: ListProps, session: Session, on_logged_in: F) -> (Self, FetchTicket)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let sort = props
            .sort
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT.to_string());
        let (revision, _) = watch::channel(0);
        let handler = session.on(SessionEvent::LoggedIn, on_logged_in);

        let mut list = Self {
            props,
            state: ListState {
                status: ListStatus::Loading,
                more_results: false,
                discussions: Vec::new(),
                sort,
            },
            generation: 0,
            revision,
            session,
            logged_in_handler: Some(handler),
        };
        let ticket = list.refresh();
        (list, ticket)
    }

    /// Release the session handler registered at construction.
    pub fn teardown(&mut self) {
        if let Some(id) = self.logged_in_handler.take() {
            self.session.off(SessionEvent::LoggedIn, id);
            debug!("DiscussionList: released loggedIn handler");
        }
    }

    // ------------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------------

    /// Subscribe to state revisions. The value changes once per transition.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn batch<F: FnOnce(&mut ListState)>(&mut self, f: F) {
        f(&mut self.state);
        self.request_redraw();
    }

    /// Publish a revision without a state change.
    pub fn request_redraw(&self) {
        self.revision.send_modify(|r| *r += 1);
    }

    // ------------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------------

    /// Clear the list and fetch the first page.
    pub fn refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.batch(|s| {
            s.status = ListStatus::Loading;
            s.discussions.clear();
        });
        debug!(
            "DiscussionList: refresh (generation {}, sort {})",
            self.generation, self.state.sort
        );
        FetchTicket {
            query: self.load_results(None),
            generation: self.generation,
            append: false,
        }
    }

    /// Build the request for a page starting at `start`.
    pub fn load_results(&self, start: Option<usize>) -> DiscussionQuery {
        DiscussionQuery::new(resolve_sort_param(&self.state.sort), start)
    }

    /// Fetch the next page, offset by the number of rows already shown.
    /// Returns `None` while another fetch is outstanding.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.loading() {
            debug!("DiscussionList: load_more ignored, fetch in flight");
            return None;
        }
        self.batch(|s| s.status = ListStatus::Loading);
        Some(FetchTicket {
            query: self.load_results(Some(self.state.discussions.len())),
            generation: self.generation,
            append: true,
        })
    }

    /// Apply a completed fetch. Returns false for stale tickets, which
    /// leave the state untouched.
    pub fn parse_results(&mut self, ticket: &FetchTicket, page: DiscussionPage) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "DiscussionList: dropping stale results (generation {} != {})",
                ticket.generation, self.generation
            );
            return false;
        }
        let count = page.len();
        let more = page.has_more();
        self.batch(|s| {
            s.status = ListStatus::Loaded;
            s.discussions.extend(page.discussions);
            s.more_results = more;
        });
        info!(
            "DiscussionList: loaded {} discussions (append={}, total={}, more={})",
            count,
            ticket.append,
            self.state.discussions.len(),
            more
        );
        true
    }

    /// Record a failed fetch. Returns false for stale tickets.
    pub fn fail(&mut self, ticket: &FetchTicket, reason: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        let reason = reason.into();
        warn!("DiscussionList: fetch failed: {}", reason);
        self.batch(|s| s.status = ListStatus::Failed(reason));
        true
    }

    /// Replace props (the host re-rendering with a new sort) and refresh.
    pub fn set_props(&mut self, props: ListProps) -> FetchTicket {
        self.state.sort = props
            .sort
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT.to_string());
        self.props = props;
        self.refresh()
    }

    // ------------------------------------------------------------------------
    // Row actions
    // ------------------------------------------------------------------------

    /// Read-number update for an unread discussion; `None` when there is
    /// nothing to mark.
    pub fn mark_as_read(&self, discussion_id: &str) -> Option<ReadUpdate> {
        let discussion = self.get(discussion_id)?;
        if !discussion.is_unread() {
            return None;
        }
        self.request_redraw();
        Some(ReadUpdate {
            discussion_id: discussion.id.clone(),
            read_number: discussion.last_post_number,
        })
    }

    /// Replace a row with the store's saved copy.
    pub fn apply_saved(&mut self, saved: Discussion) -> bool {
        let Some(idx) = self.index_of(&saved.id) else {
            return false;
        };
        self.batch(|s| s.discussions[idx] = saved);
        true
    }

    /// Delete a discussion once the user confirmed it.
    ///
    /// Declined confirmations change nothing and produce nothing to send.
    pub fn delete(
        &mut self,
        discussion_id: &str,
        confirmed: bool,
        router: &mut dyn Router,
    ) -> Option<DeleteOutcome> {
        if !confirmed {
            return None;
        }
        let removed = self.remove_discussion(discussion_id);
        let navigated_back = router.current_discussion_id().as_deref() == Some(discussion_id)
            && router.back();
        info!(
            "DiscussionList: deleting discussion {} (navigated_back={})",
            discussion_id, navigated_back
        );
        Some(DeleteOutcome {
            discussion_id: discussion_id.to_string(),
            removed,
            navigated_back,
        })
    }

    /// Remove at most one discussion with this id.
    pub fn remove_discussion(&mut self, discussion_id: &str) -> bool {
        match self.index_of(discussion_id) {
            Some(idx) => {
                self.batch(|s| {
                    s.discussions.remove(idx);
                });
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Display modes
    // ------------------------------------------------------------------------

    pub fn terminal_post_type(&self) -> TerminalPostType {
        TerminalPostType::for_sort(&self.state.sort)
    }

    /// Count mode implied by the sort. Rendering reads `props.count_type`.
    pub fn count_type(&self) -> CountType {
        CountType::for_sort(&self.state.sort)
    }

    pub fn info_items(&self, discussion: &Discussion) -> ItemList<InfoItem> {
        let last_post = self.props.terminal_post_type != Some(TerminalPostType::Start);
        let (user, time) = if last_post {
            (&discussion.last_user, discussion.last_time)
        } else {
            (&discussion.start_user, discussion.start_time)
        };
        let mut items = ItemList::new();
        items.add(
            "terminalPost",
            InfoItem::TerminalPost {
                last_post,
                username: user.as_ref().map(|u| u.username.clone()),
                time,
            },
        );
        items
    }

    pub fn control_items(&self, discussion: &Discussion) -> ItemList<ControlItem> {
        let mut items = ItemList::new();
        if discussion.can_delete {
            items.add("delete", ControlItem::Delete);
        }
        items
    }

    // ------------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------------

    /// Project the current state into render input.
    pub fn view(&self, router: &dyn Router, now: DateTime<Utc>) -> ListView {
        let rows = self
            .state
            .discussions
            .iter()
            .map(|d| self.row_view(d, router, now))
            .collect();

        let footer = match &self.state.status {
            ListStatus::Loading => Footer::Loading,
            ListStatus::Failed(reason) => Footer::Failed(reason.clone()),
            _ if self.state.more_results => Footer::LoadMore,
            _ => Footer::None,
        };

        ListView {
            rows,
            footer,
            sort_label: sort_label(&self.state.sort),
            now,
        }
    }

    fn row_view(&self, d: &Discussion, router: &dyn Router, now: DateTime<Utc>) -> RowView {
        let unread = d.is_unread();
        let display_unread = self.props.count_type != Some(CountType::Replies) && unread;
        let count = if display_unread {
            CountView {
                value: d.unread_count,
                text: abbreviate_number(d.unread_count),
                label: CountLabel::Unread,
            }
        } else {
            CountView {
                value: d.replies_count,
                text: abbreviate_number(d.replies_count),
                label: CountLabel::Replies,
            }
        };

        let author = d.start_user.as_ref().map(|u| {
            let tooltip = match d.start_time {
                Some(t) => format!("Started by {} {}", u.username, human_time(t, now)),
                None => format!("Started by {}", u.username),
            };
            AuthorView {
                username: u.username.clone(),
                initial: u.initial(),
                route: router.route_user(u),
                tooltip,
            }
        });

        let jump_to = d.jump_to();
        RowView {
            id: d.id.clone(),
            title: d.title.clone(),
            controls: self.control_items(d).into_vec(),
            author,
            badges: d.badges.clone(),
            route: router.route_discussion_near(d, jump_to),
            jump_to,
            info: self.info_items(d).into_vec(),
            count,
            unread,
            active: router.is_active(d),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn props(&self) -> &ListProps {
        &self.props
    }

    pub fn discussions(&self) -> &[Discussion] {
        &self.state.discussions
    }

    pub fn get(&self, discussion_id: &str) -> Option<&Discussion> {
        self.state.discussions.iter().find(|d| d.id == discussion_id)
    }

    fn index_of(&self, discussion_id: &str) -> Option<usize> {
        self.state
            .discussions
            .iter()
            .position(|d| d.id == discussion_id)
    }

    pub fn len(&self) -> usize {
        self.state.discussions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.discussions.is_empty()
    }

    pub fn loading(&self) -> bool {
        self.state.status == ListStatus::Loading
    }

    pub fn more_results(&self) -> bool {
        self.state.more_results
    }

    pub fn sort(&self) -> &str {
        &self.state.sort
    }

    pub fn status(&self) -> &ListStatus {
        &self.state.status
    }
}

impl Drop for DiscussionList {
    fn drop(&mut self) {
        self.teardown();
    }
}
