//! Text normalization, hour formatting, and joining helpers.

pub mod escape;
pub mod hours;
pub mod join;
pub mod normalize;

pub use escape::escape_html_line_breaks;
pub use hours::{format_duration, format_minutes, parse_minutes};
pub use join::join_non_blank;
