//! Shared test helpers

pub mod format_fixtures;
