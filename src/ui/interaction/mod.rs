//! Mouse interaction: clickable regions registered while rendering.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
