//! View-only types for the discussion list.
//!
//! These are produced by `DiscussionList::view` and rendered by `ui`
//! without touching list state.

use chrono::{DateTime, Utc};

use crate::models::Badge;

// ============================================================================
// Row items
// ============================================================================

/// An entry in a row's info list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoItem {
    /// First/last post indicator.
    TerminalPost {
        /// True for "replied", false for "started".
        last_post: bool,
        username: Option<String>,
        time: Option<DateTime<Utc>>,
    },
}

impl InfoItem {
    /// Text shown in the row, e.g. "toby replied 5 minutes ago".
    pub fn text(&self, now: DateTime<Utc>) -> String {
        match self {
            InfoItem::TerminalPost {
                last_post,
                username,
                time,
            } => {
                let verb = if *last_post { "replied" } else { "started" };
                let who = username.as_deref().unwrap_or("[deleted]");
                match time {
                    Some(t) => format!("{} {} {}", who, verb, super::human_time(*t, now)),
                    None => format!("{} {}", who, verb),
                }
            }
        }
    }
}

/// A contextual action offered on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlItem {
    Delete,
}

impl ControlItem {
    pub fn label(&self) -> &'static str {
        match self {
            ControlItem::Delete => "Delete",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ControlItem::Delete => "x",
        }
    }

    /// Key that triggers this control on the selected row.
    pub fn key(&self) -> char {
        match self {
            ControlItem::Delete => 'd',
        }
    }
}

/// Whether a count shows unread posts or replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountLabel {
    Unread,
    Replies,
}

impl CountLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountLabel::Unread => "unread",
            CountLabel::Replies => "replies",
        }
    }
}

/// The clickable count at the end of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountView {
    pub value: u32,
    /// Abbreviated value for display.
    pub text: String,
    pub label: CountLabel,
}

/// The author link of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorView {
    pub username: String,
    pub initial: char,
    pub route: String,
    /// "Started by {username} {time}"
    pub tooltip: String,
}

// ============================================================================
// Rows and list
// ============================================================================

/// Pre-computed view data for a single discussion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub title: String,
    pub controls: Vec<ControlItem>,
    pub author: Option<AuthorView>,
    pub badges: Vec<Badge>,
    /// Route of the discussion near its first unread post.
    pub route: String,
    pub jump_to: u32,
    pub info: Vec<InfoItem>,
    pub count: CountView,
    pub unread: bool,
    pub active: bool,
}

/// What is shown below the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    Loading,
    LoadMore,
    Failed(String),
    None,
}

/// Full render input for the discussion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub footer: Footer,
    pub sort_label: String,
    pub now: DateTime<Utc>,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: &str) -> Option<&RowView> {
        self.rows.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_terminal_post_text() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let item = InfoItem::TerminalPost {
            last_post: true,
            username: Some("toby".to_string()),
            time: Some(now - Duration::minutes(5)),
        };
        assert_eq!(item.text(now), "toby replied 5 minutes ago");

        let item = InfoItem::TerminalPost {
            last_post: false,
            username: None,
            time: None,
        };
        assert_eq!(item.text(now), "[deleted] started");
    }

    #[test]
    fn test_control_item_metadata() {
        assert_eq!(ControlItem::Delete.label(), "Delete");
        assert_eq!(ControlItem::Delete.key(), 'd');
    }

    #[test]
    fn test_count_label() {
        assert_eq!(CountLabel::Unread.as_str(), "unread");
        assert_eq!(CountLabel::Replies.as_str(), "replies");
    }
}
