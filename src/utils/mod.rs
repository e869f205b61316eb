//! Shared utilities.

pub mod date;
pub mod exec;
pub mod git;
pub mod path;
pub mod fmt;

pub use fmt::{format_kb, plural_count};
