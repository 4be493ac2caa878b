//! Score consulting recruiting events against an MBA candidate's profile.
//!
//! The core is [`scoring::score`], a pure function from an event and a
//! profile to a [`scoring::ScoreResult`]. Everything else in this crate is
//! the command-line shell around it: config loading, input checks,
//! terminal output and JSON export.

pub mod catalog;
pub mod config;
pub mod export;
pub mod output;
pub mod scoring;
