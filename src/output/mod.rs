pub mod formatter;

pub use formatter::{format_result, score_bar, should_use_colors};
