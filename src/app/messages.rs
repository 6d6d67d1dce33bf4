//! AppMessage enum for results coming back from spawned store calls.

use crate::models::{Discussion, DiscussionPage};
use crate::state::FetchTicket;

/// Messages sent to the UI task by background work.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fetch finished; applied only if the ticket is still current
    DiscussionsLoaded {
        ticket: FetchTicket,
        page: DiscussionPage,
    },
    /// A fetch failed with a user-facing reason
    DiscussionsFailed { ticket: FetchTicket, error: String },
    /// The session logged in; the list should start over
    RefreshRequested,
    /// The store accepted a read-number save
    DiscussionSaved(Discussion),
    /// A read-number save failed
    SaveFailed { discussion_id: String, error: String },
    /// The store deleted a discussion
    DiscussionDeleted { discussion_id: String },
    /// A delete failed
    DeleteFailed { discussion_id: String, error: String },
}
