//! End-to-end flows through `App` against the in-memory store.

mod common;

use common::{app_with, discussion, page, pump};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use discuss::adapters::mock::StoreCall;
use discuss::adapters::MockStore;
use discuss::error::{NetworkError, StoreError};
use discuss::models::DiscussionQuery;
use discuss::session::Session;
use std::sync::Arc;
use discuss::state::ListStatus;
use discuss::traits::Router;
use discuss::view_state::Footer;

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

#[tokio::test]
async fn test_initial_load_selects_first_row() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 3, Some(1)), discussion("2", "Two", 1, Some(1))], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    assert_eq!(app.list.len(), 2);
    assert_eq!(app.selected, Some(0));
    assert_eq!(app.list.status(), &ListStatus::Loaded);
    assert_eq!(store.finds(), vec![DiscussionQuery::new("recent", None)]);
}

#[tokio::test]
async fn test_unknown_sort_requests_recent() {
    let store = MockStore::new();
    let mut app = app_with(&store, "bogus");
    pump(&mut app).await;

    assert_eq!(store.finds()[0].sort, "recent");
}

#[tokio::test]
async fn test_load_more_appends_with_offset() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None), discussion("2", "Two", 1, None)], true));
    store.push_page(page(vec![discussion("3", "Three", 1, None)], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;
    assert!(app.list.more_results());

    app.handle_key(key('m'));
    // A second request while loading is refused.
    app.handle_key(key('m'));
    pump(&mut app).await;

    let ids: Vec<_> = app.list.discussions().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(!app.list.more_results());
    assert_eq!(store.finds().len(), 2);
    assert_eq!(store.finds()[1].start, Some(2));
}

#[tokio::test]
async fn test_mark_as_read_saves_once_and_applies() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 10, Some(3))], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    app.handle_key(key('r'));
    pump(&mut app).await;

    assert_eq!(
        store.saves(),
        vec![StoreCall::SaveReadNumber {
            id: "1".to_string(),
            read_number: 10
        }]
    );
    assert!(!app.list.get("1").unwrap().is_unread());

    // Already read: nothing more is sent.
    app.handle_key(key('r'));
    assert_eq!(store.saves().len(), 1);
}

#[tokio::test]
async fn test_delete_declined_keeps_row() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    app.handle_key(key('d'));
    assert_eq!(app.pending_delete.as_deref(), Some("1"));
    app.handle_key(key('n'));

    assert!(app.pending_delete.is_none());
    assert_eq!(app.list.len(), 1);
    assert!(store.deletes().is_empty());
}

#[tokio::test]
async fn test_delete_confirmed_removes_target_and_calls_store() {
    let store = MockStore::new();
    store.push_page(page(
        vec![discussion("1", "One", 1, None), discussion("2", "Two", 1, None)],
        false,
    ));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    app.handle_key(key('j'));
    app.handle_key(key('d'));
    app.handle_key(key('y'));
    pump(&mut app).await;

    let ids: Vec<_> = app.list.discussions().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
    assert_eq!(store.deletes(), vec!["2".to_string()]);
    assert_eq!(app.selected, Some(0));
}

#[tokio::test]
async fn test_deleting_open_discussion_goes_back() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("7", "Open me", 4, Some(1))], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.router.current_path(), "/d/7-open-me/2");

    app.handle_key(key('d'));
    app.handle_key(key('y'));
    pump(&mut app).await;

    assert_eq!(app.router.current_path(), "/");
}

#[tokio::test]
async fn test_delete_failure_shows_status() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));
    store.fail_deletes_with(StoreError::Network(NetworkError::HttpStatus {
        status: 403,
        message: "Forbidden".to_string(),
    }));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;
    app.handle_key(key('d'));
    app.handle_key(key('y'));
    pump(&mut app).await;

    assert!(app.status_message.as_deref().unwrap().contains("Could not delete"));
}

#[tokio::test]
async fn test_fetch_failure_then_retry() {
    let store = MockStore::new();
    store.push_error(StoreError::Network(NetworkError::Timeout {
        operation: "fetch discussions".to_string(),
    }));
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;
    assert!(matches!(app.list.status(), ListStatus::Failed(_)));
    assert!(matches!(app.view().footer, Footer::Failed(_)));

    app.handle_key(key('m'));
    pump(&mut app).await;

    assert_eq!(app.list.status(), &ListStatus::Loaded);
    assert_eq!(app.list.len(), 1);
}

#[tokio::test]
async fn test_sort_cycle_refetches_with_new_sort() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));
    store.push_page(page(vec![discussion("2", "Two", 1, None)], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    app.handle_key(key('s'));
    assert_eq!(app.list.sort(), "replies");
    pump(&mut app).await;

    assert_eq!(store.finds()[1].sort, "-replies");
    assert_eq!(app.list.discussions()[0].id, "2");
}

#[tokio::test]
async fn test_login_triggers_refresh() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;

    app.session.log_in("secret");
    // RefreshRequested, then the new page.
    pump(&mut app).await;
    pump(&mut app).await;

    assert_eq!(store.finds().len(), 2);
    assert_eq!(app.list.len(), 1);
}

#[tokio::test]
async fn test_quit_keys() {
    let store = MockStore::new();
    let mut app = app_with(&store, "recent");
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    let mut app = app_with(&store, "recent");
    app.handle_key(key('q'));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_load_more_key_ignored_without_more_results() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));

    let mut app = app_with(&store, "recent");
    pump(&mut app).await;
    assert_eq!(app.view().footer, Footer::None);

    app.handle_key(key('m'));

    assert!(!app.list.loading());
    assert_eq!(app.view().footer, Footer::None);
    assert_eq!(store.finds().len(), 1);
}

#[tokio::test]
async fn test_session_logged_in_before_start_fetches_once() {
    let store = MockStore::new();
    store.push_page(page(vec![discussion("1", "One", 1, None)], false));

    let session = Session::new();
    session.log_in("secret");
    let config = discuss::config::Config::default();
    let mut app = discuss::app::App::new(Arc::new(store.clone()), session, &config);
    pump(&mut app).await;

    assert_eq!(store.finds().len(), 1);
    assert_eq!(app.list.len(), 1);
    assert!(app.message_rx.as_mut().unwrap().try_recv().is_err());
}
