//! View-only state, rendered without access to the list or the app.

mod format;
mod list_view;

pub use format::{abbreviate_number, human_time};
pub use list_view::{
    AuthorView, ControlItem, CountLabel, CountView, Footer, InfoItem, ListView, RowView,
};
