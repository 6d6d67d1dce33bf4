//! In-memory discussion store for tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::models::{Discussion, DiscussionPage, DiscussionQuery};
use crate::traits::DiscussionStore;

/// A call made against the mock store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Find(DiscussionQuery),
    SaveReadNumber { id: String, read_number: u32 },
    Delete(String),
}

#[derive(Debug, Default)]
struct MockStoreInner {
    pages: VecDeque<Result<DiscussionPage, StoreError>>,
    known: HashMap<String, Discussion>,
    calls: Vec<StoreCall>,
    save_error: Option<StoreError>,
    delete_error: Option<StoreError>,
}

/// Store that answers `find` with queued pages and remembers every call.
///
/// Saves mark the stored copy read and return it; deletes forget it.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next `find_discussions`.
    pub fn push_page(&self, page: DiscussionPage) {
        let mut inner = self.inner.lock().unwrap();
        for d in &page.discussions {
            inner.known.insert(d.id.clone(), d.clone());
        }
        inner.pages.push_back(Ok(page));
    }

    /// Queue a failure for the next `find_discussions`.
    pub fn push_error(&self, err: StoreError) {
        self.inner.lock().unwrap().pages.push_back(Err(err));
    }

    pub fn fail_saves_with(&self, err: StoreError) {
        self.inner.lock().unwrap().save_error = Some(err);
    }

    pub fn fail_deletes_with(&self, err: StoreError) {
        self.inner.lock().unwrap().delete_error = Some(err);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn saves(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, StoreCall::SaveReadNumber { .. }))
            .collect()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                StoreCall::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn finds(&self) -> Vec<DiscussionQuery> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                StoreCall::Find(q) => Some(q),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl DiscussionStore for MockStore {
    async fn find_discussions(
        &self,
        query: &DiscussionQuery,
    ) -> Result<DiscussionPage, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::Find(query.clone()));
        inner
            .pages
            .pop_front()
            .unwrap_or_else(|| Ok(DiscussionPage::default()))
    }

    async fn save_read_number(
        &self,
        discussion_id: &str,
        read_number: u32,
    ) -> Result<Discussion, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::SaveReadNumber {
            id: discussion_id.to_string(),
            read_number,
        });
        if let Some(err) = inner.save_error.clone() {
            return Err(err);
        }
        let discussion = inner
            .known
            .get_mut(discussion_id)
            .ok_or_else(|| StoreError::NotFound(discussion_id.to_string()))?;
        discussion.read_number = Some(read_number);
        discussion.unread_count = discussion.last_post_number.saturating_sub(read_number);
        Ok(discussion.clone())
    }

    async fn delete_discussion(&self, discussion_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall::Delete(discussion_id.to_string()));
        if let Some(err) = inner.delete_error.clone() {
            return Err(err);
        }
        inner.known.remove(discussion_id);
        Ok(())
    }
}
