//! Data records exchanged with the forum store.

pub mod discussion;
pub mod document;
pub mod page;

pub use discussion::{slugify, Badge, Discussion, User};
pub use document::{parse_discussion, parse_discussion_page};
pub use page::{DiscussionPage, DiscussionQuery};
