//! Session state and its event bus.
//!
//! Components subscribe to session events with [`Session::on`] and must
//! release the handler with [`Session::off`] using the id they were given.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

/// Events published by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::LoggedIn => "loggedIn",
            SessionEvent::LoggedOut => "loggedOut",
        }
    }
}

/// Identifies one registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Arc<dyn Fn() + Send + Sync>;

struct Registration {
    id: HandlerId,
    event: SessionEvent,
    handler: Handler,
}

#[derive(Default)]
struct SessionInner {
    token: Option<String>,
    registrations: Vec<Registration>,
    next_id: u64,
}

/// Shared session handle. Clones refer to the same session.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Session")
            .field("logged_in", &inner.token.is_some())
            .field("handlers", &inner.registrations.len())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a handler for an event.
    pub fn on<F>(&self, event: SessionEvent, handler: F) -> HandlerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = HandlerId(inner.next_id);
        inner.next_id += 1;
        inner.registrations.push(Registration {
            id,
            event,
            handler: Arc::new(handler),
        });
        debug!("Session: registered {} handler {:?}", event.name(), id);
        id
    }

    /// Remove exactly the handler registered under `id` for `event`.
    /// Returns false if no such handler exists.
    pub fn off(&self, event: SessionEvent, id: HandlerId) -> bool {
        let mut inner = self.lock();
        let before = inner.registrations.len();
        inner
            .registrations
            .retain(|r| !(r.id == id && r.event == event));
        inner.registrations.len() != before
    }

    /// Invoke every handler registered for `event`.
    ///
    /// Handlers run outside the session lock, so they may call `on`/`off`.
    pub fn emit(&self, event: SessionEvent) {
        let handlers: Vec<Handler> = self
            .lock()
            .registrations
            .iter()
            .filter(|r| r.event == event)
            .map(|r| Arc::clone(&r.handler))
            .collect();
        debug!("Session: emitting {} to {} handlers", event.name(), handlers.len());
        for handler in handlers {
            handler();
        }
    }

    /// Number of handlers registered for `event`.
    pub fn handler_count(&self, event: SessionEvent) -> usize {
        self.lock()
            .registrations
            .iter()
            .filter(|r| r.event == event)
            .count()
    }

    /// Store the API token and publish [`SessionEvent::LoggedIn`].
    pub fn log_in(&self, token: impl Into<String>) {
        self.lock().token = Some(token.into());
        info!("Session: logged in");
        self.emit(SessionEvent::LoggedIn);
    }

    /// Forget the API token and publish [`SessionEvent::LoggedOut`].
    pub fn log_out(&self) {
        self.lock().token = None;
        info!("Session: logged out");
        self.emit(SessionEvent::LoggedOut);
    }

    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.lock().token.is_some()
    }
}
