//! Color theme constants for the discussion list
//!
//! Minimal dark palette.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Unread discussions and unread counts
pub const COLOR_UNREAD: Color = Color::Rgb(0, 122, 204);

/// Marker for the discussion the current route shows
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 40);

/// Badge text
pub const COLOR_BADGE: Color = Color::Yellow;

/// Avatar block
pub const COLOR_AVATAR: Color = Color::Cyan;

/// Destructive controls and error text
pub const COLOR_DANGER: Color = Color::Red;
