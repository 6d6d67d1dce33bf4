//! Store calls run on spawned tasks and report back over the app channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::state::{FetchTicket, ReadUpdate};
use crate::traits::DiscussionStore;

use super::{App, AppMessage};

impl App {
    /// Run a fetch for `ticket` in the background.
    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        tokio::spawn(run_fetch(store, tx, ticket));
    }

    /// Save a read number in the background.
    pub fn spawn_save(&self, update: ReadUpdate) {
        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        tokio::spawn(run_save(store, tx, update));
    }

    /// Delete a discussion in the background.
    pub fn spawn_delete(&self, discussion_id: String) {
        let store = Arc::clone(&self.store);
        let tx = self.message_tx.clone();
        tokio::spawn(run_delete(store, tx, discussion_id));
    }
}

async fn run_fetch(
    store: Arc<dyn DiscussionStore>,
    tx: mpsc::UnboundedSender<AppMessage>,
    ticket: FetchTicket,
) {
    debug!(
        "Fetching discussions sort={} start={:?} (generation {})",
        ticket.query.sort, ticket.query.start, ticket.generation
    );
    let message = match store.find_discussions(&ticket.query).await {
        Ok(page) => AppMessage::DiscussionsLoaded { ticket, page },
        Err(e) => {
            error!("Failed to fetch discussions [{}]: {}", e.error_code(), e);
            AppMessage::DiscussionsFailed {
                ticket,
                error: e.user_message(),
            }
        }
    };
    let _ = tx.send(message);
}

async fn run_save(
    store: Arc<dyn DiscussionStore>,
    tx: mpsc::UnboundedSender<AppMessage>,
    update: ReadUpdate,
) {
    let message = match store
        .save_read_number(&update.discussion_id, update.read_number)
        .await
    {
        Ok(saved) => {
            info!(
                "Marked discussion {} read up to post {}",
                update.discussion_id, update.read_number
            );
            AppMessage::DiscussionSaved(saved)
        }
        Err(e) => {
            warn!("Failed to save read number for {}: {}", update.discussion_id, e);
            AppMessage::SaveFailed {
                discussion_id: update.discussion_id,
                error: e.user_message(),
            }
        }
    };
    let _ = tx.send(message);
}

async fn run_delete(
    store: Arc<dyn DiscussionStore>,
    tx: mpsc::UnboundedSender<AppMessage>,
    discussion_id: String,
) {
    let message = match store.delete_discussion(&discussion_id).await {
        Ok(()) => {
            info!("Deleted discussion {}", discussion_id);
            AppMessage::DiscussionDeleted { discussion_id }
        }
        Err(e) => {
            error!("Failed to delete discussion {}: {}", discussion_id, e);
            AppMessage::DeleteFailed {
                discussion_id,
                error: e.user_message(),
            }
        }
    };
    let _ = tx.send(message);
}
