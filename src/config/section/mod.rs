//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitepush.toml`:
//!
//! | Module   | TOML Section | Purpose                                |
//! |----------|--------------|----------------------------------------|
//! | `build`  | `[build]`    | Source list, output dir, minification  |
//! | `deploy` | `[deploy]`   | Publishing branch, remote, message     |

mod build;
mod deploy;

pub use build::BuildConfig;
pub use deploy::DeployConfig;
