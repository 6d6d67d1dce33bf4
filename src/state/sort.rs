//! Sort options and the display modes derived from them.

/// A named display choice mapped to a backend sort parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub key: &'static str,
    pub label: &'static str,
    pub param: &'static str,
}

/// Fixed sort table. The first entry is the fallback for unknown keys.
pub const SORT_OPTIONS: [SortOption; 4] = [
    SortOption {
        key: "recent",
        label: "Recent",
        param: "recent",
    },
    SortOption {
        key: "replies",
        label: "Replies",
        param: "-replies",
    },
    SortOption {
        key: "newest",
        label: "Newest",
        param: "-created",
    },
    SortOption {
        key: "oldest",
        label: "Oldest",
        param: "created",
    },
];

pub const DEFAULT_SORT: &str = "recent";

/// Look up a sort option by key.
pub fn find_sort(key: &str) -> Option<&'static SortOption> {
    SORT_OPTIONS.iter().find(|o| o.key == key)
}

/// Backend parameter for a sort key, falling back to the first entry.
pub fn resolve_sort_param(key: &str) -> &'static str {
    find_sort(key).unwrap_or(&SORT_OPTIONS[0]).param
}

/// Display label for a sort key; unknown keys are shown verbatim.
pub fn sort_label(key: &str) -> String {
    find_sort(key)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// The key after `key` in the table, wrapping around.
pub fn next_sort_key(key: &str) -> &'static str {
    let idx = SORT_OPTIONS.iter().position(|o| o.key == key);
    match idx {
        Some(i) => SORT_OPTIONS[(i + 1) % SORT_OPTIONS.len()].key,
        None => SORT_OPTIONS[0].key,
    }
}

/// The key before `key` in the table, wrapping around.
pub fn prev_sort_key(key: &str) -> &'static str {
    let idx = SORT_OPTIONS.iter().position(|o| o.key == key);
    match idx {
        Some(0) | None => SORT_OPTIONS[SORT_OPTIONS.len() - 1].key,
        Some(i) => SORT_OPTIONS[i - 1].key,
    }
}

/// Which post represents a discussion in its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalPostType {
    /// The first post (who started it, when).
    Start,
    /// The most recent post (who replied last, when).
    Last,
}

impl TerminalPostType {
    pub fn for_sort(key: &str) -> Self {
        if matches!(key, "newest" | "oldest") {
            TerminalPostType::Start
        } else {
            TerminalPostType::Last
        }
    }
}

/// Which number a row's count shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountType {
    Unread,
    Replies,
}

impl CountType {
    pub fn for_sort(key: &str) -> Self {
        if key == "replies" {
            CountType::Replies
        } else {
            CountType::Unread
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys() {
        assert_eq!(resolve_sort_param("recent"), "recent");
        assert_eq!(resolve_sort_param("replies"), "-replies");
        assert_eq!(resolve_sort_param("newest"), "-created");
        assert_eq!(resolve_sort_param("oldest"), "created");
    }

    #[test]
    fn test_unknown_key_falls_back_to_first_entry() {
        assert_eq!(resolve_sort_param("popular"), "recent");
        assert_eq!(resolve_sort_param(""), "recent");
    }

    #[test]
    fn test_sort_cycle_wraps() {
        assert_eq!(next_sort_key("recent"), "replies");
        assert_eq!(next_sort_key("oldest"), "recent");
        assert_eq!(prev_sort_key("recent"), "oldest");
        assert_eq!(prev_sort_key("newest"), "replies");
        assert_eq!(next_sort_key("bogus"), "recent");
    }

    #[test]
    fn test_terminal_post_type_for_sort() {
        assert_eq!(TerminalPostType::for_sort("newest"), TerminalPostType::Start);
        assert_eq!(TerminalPostType::for_sort("oldest"), TerminalPostType::Start);
        assert_eq!(TerminalPostType::for_sort("recent"), TerminalPostType::Last);
        assert_eq!(TerminalPostType::for_sort("replies"), TerminalPostType::Last);
        assert_eq!(TerminalPostType::for_sort("bogus"), TerminalPostType::Last);
    }

    #[test]
    fn test_count_type_for_sort() {
        assert_eq!(CountType::for_sort("replies"), CountType::Replies);
        assert_eq!(CountType::for_sort("recent"), CountType::Unread);
    }

    #[test]
    fn test_sort_label() {
        assert_eq!(sort_label("newest"), "Newest");
        assert_eq!(sort_label("custom"), "custom");
    }
}
