pub mod engine;
pub mod tables;
pub mod types;
pub mod validation;

pub use engine::score;
pub use types::*;
pub use validation::{range_warnings, unknown_tags, validate_event};
