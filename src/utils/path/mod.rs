//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `file_name_of`)

pub mod fs;

pub use fs::{file_name_of, normalize_path};
