//! Asset processing: classification, minification and the build manifest.

mod kind;
mod manifest;
pub mod minify;
mod process;

pub use kind::AssetKind;
pub use manifest::{BuildManifest, MANIFEST_FILE};
pub use process::{AssetReport, prepare_output_dir, process_sources, report_sizes};
