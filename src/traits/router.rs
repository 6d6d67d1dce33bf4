//! Router trait abstraction.
//!
//! Route shapes:
//! - discussion: `/d/{id}-{slug}` (or `/d/{id}` without a slug)
//! - discussion near a post: `/d/{id}-{slug}/{near}`
//! - user profile: `/u/{username}`

use crate::models::{Discussion, User};

/// Route building plus current-route introspection and history.
pub trait Router: Send {
    /// Path currently shown.
    fn current_path(&self) -> String;

    /// Push a new path onto the history.
    fn navigate(&mut self, path: &str);

    /// Go back one entry. Returns false when there is nothing to go back to.
    fn back(&mut self) -> bool;

    fn route_discussion(&self, discussion: &Discussion) -> String {
        if discussion.slug.is_empty() {
            format!("/d/{}", discussion.id)
        } else {
            format!("/d/{}-{}", discussion.id, discussion.slug)
        }
    }

    fn route_discussion_near(&self, discussion: &Discussion, near: u32) -> String {
        format!("{}/{}", self.route_discussion(discussion), near)
    }

    fn route_user(&self, user: &User) -> String {
        format!("/u/{}", urlencoding::encode(&user.username))
    }

    /// Id of the discussion the current route shows, if any.
    fn current_discussion_id(&self) -> Option<String> {
        let path = self.current_path();
        let rest = path.strip_prefix("/d/")?;
        let segment = rest.split('/').next()?;
        let id = segment.split('-').next()?;
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    /// Whether the current route is (a prefix match of) this discussion's route.
    fn is_active(&self, discussion: &Discussion) -> bool {
        self.current_path()
            .starts_with(&self.route_discussion(discussion))
    }
}
