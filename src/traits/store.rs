//! Discussion store trait abstraction.
//!
//! The list never talks to the network itself; it hands queries and
//! updates to a store injected at construction.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Discussion, DiscussionPage, DiscussionQuery};

/// Remote source of discussions.
#[async_trait]
pub trait DiscussionStore: Send + Sync {
    /// Fetch one page of discussions in server order.
    async fn find_discussions(&self, query: &DiscussionQuery)
        -> Result<DiscussionPage, StoreError>;

    /// Persist a new read number and return the saved discussion.
    async fn save_read_number(
        &self,
        discussion_id: &str,
        read_number: u32,
    ) -> Result<Discussion, StoreError>;

    /// Delete a discussion.
    async fn delete_discussion(&self, discussion_id: &str) -> Result<(), StoreError>;
}
