//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use discuss::adapters::MockStore;
use discuss::app::App;
use discuss::config::Config;
use discuss::models::{Discussion, DiscussionPage, User};
use discuss::session::Session;

/// An unread discussion started by toby with `posts` posts, `read` of
/// them read.
pub fn discussion(id: &str, title: &str, posts: u32, read: Option<u32>) -> Discussion {
    let started = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    Discussion::new(id, title)
        .with_start(User::new("1", "toby"), started)
        .with_last(User::new("2", "franz"), started)
        .with_posts(posts, read)
        .with_replies(posts.saturating_sub(1))
        .with_can_delete(true)
}

pub fn page(discussions: Vec<Discussion>, more: bool) -> DiscussionPage {
    let more_url = more.then(|| "http://forum.test/api/discussions?page[offset]=20".to_string());
    DiscussionPage::new(discussions, more_url)
}

/// App over a mock store, with the first page already queued.
pub fn app_with(store: &MockStore, sort: &str) -> App {
    let config = Config::default().with_sort(sort);
    App::new(Arc::new(store.clone()), Session::new(), &config)
}

/// Receive and apply the next background result.
pub async fn pump(app: &mut App) {
    let msg = tokio::time::timeout(Duration::from_secs(2), app.recv_message())
        .await
        .expect("timed out waiting for app message")
        .expect("app channel closed");
    app.handle_message(msg);
}
