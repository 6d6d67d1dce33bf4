//! Discussion, user and badge records as the list consumes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A forum member, as far as the list needs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            avatar_url: None,
        }
    }

    /// Single-character stand-in for the avatar image.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// A status badge shown next to a discussion (sticky, locked, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Badge {
    pub fn new(label: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            label: label.into(),
            icon: icon.map(str::to_string),
        }
    }
}

/// A discussion thread with the metadata shown in a list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub start_user: Option<User>,
    pub start_time: Option<DateTime<Utc>>,
    pub last_user: Option<User>,
    pub last_time: Option<DateTime<Utc>>,
    pub last_post_number: u32,
    /// Highest post number the current user has read. `None` for guests
    /// or discussions the user never opened.
    pub read_number: Option<u32>,
    pub unread_count: u32,
    pub replies_count: u32,
    pub badges: Vec<Badge>,
    pub can_delete: bool,
}

impl Discussion {
    /// Create a discussion with the given id and title and empty metadata.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            slug: slugify(&title),
            title,
            start_user: None,
            start_time: None,
            last_user: None,
            last_time: None,
            last_post_number: 1,
            read_number: None,
            unread_count: 0,
            replies_count: 0,
            badges: Vec::new(),
            can_delete: false,
        }
    }

    /// Builder-style setter for the start user and time.
    pub fn with_start(mut self, user: User, time: DateTime<Utc>) -> Self {
        self.start_user = Some(user);
        self.start_time = Some(time);
        self
    }

    /// Builder-style setter for the last poster and time.
    pub fn with_last(mut self, user: User, time: DateTime<Utc>) -> Self {
        self.last_user = Some(user);
        self.last_time = Some(time);
        self
    }

    /// Builder-style setter for post numbers; derives the unread count.
    pub fn with_posts(mut self, last_post_number: u32, read_number: Option<u32>) -> Self {
        self.last_post_number = last_post_number;
        self.read_number = read_number;
        self.unread_count = last_post_number.saturating_sub(read_number.unwrap_or(0));
        self
    }

    /// Builder-style setter for the replies count
    pub fn with_replies(mut self, replies_count: u32) -> Self {
        self.replies_count = replies_count;
        self
    }

    /// Builder-style setter for badges
    pub fn with_badges(mut self, badges: Vec<Badge>) -> Self {
        self.badges = badges;
        self
    }

    /// Builder-style setter for the delete capability
    pub fn with_can_delete(mut self, can_delete: bool) -> Self {
        self.can_delete = can_delete;
        self
    }

    pub fn is_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Post to jump to when opening the discussion: the first unread post,
    /// clamped to the last post.
    pub fn jump_to(&self) -> u32 {
        self.last_post_number
            .min(self.read_number.unwrap_or(0).saturating_add(1))
    }

    /// Local effect of a successful read-number save.
    pub fn mark_read_locally(&mut self) {
        self.read_number = Some(self.last_post_number);
        self.unread_count = 0;
    }
}

/// Lowercase, hyphen-separated slug for a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
