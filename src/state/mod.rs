//! Application state: the discussion list view-model and its sort table.

pub mod discussion_list;
pub mod item_list;
pub mod sort;

pub use discussion_list::{
    DeleteOutcome, DiscussionList, FetchTicket, ListProps, ListState, ListStatus, ReadUpdate,
};
pub use item_list::ItemList;
pub use sort::{
    find_sort, next_sort_key, prev_sort_key, resolve_sort_param, sort_label, CountType,
    SortOption, TerminalPostType, DEFAULT_SORT, SORT_OPTIONS,
};
