//! Asset processing with side effects (copying, minification).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::AssetKind;
use super::minify::minify_by_kind;
use crate::utils::format_kb;
use crate::utils::path::file_name_of;
use crate::{debug, log};

/// A source that was written to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedAsset {
    pub source: PathBuf,
    pub output: PathBuf,
    pub kind: AssetKind,
}

/// A source whose read or write failed.
#[derive(Debug)]
pub struct FailedAsset {
    pub source: PathBuf,
    pub error: anyhow::Error,
}

/// Per-source results of one pass over the configured list.
#[derive(Debug, Default)]
pub struct AssetReport {
    pub processed: Vec<ProcessedAsset>,
    /// Configured sources that did not exist.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FailedAsset>,
}

impl AssetReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Create the output directory if needed.
///
/// Returns `true` when the directory was created by this call.
pub fn prepare_output_dir(dir: &Path) -> Result<bool> {
    let existed = dir.is_dir();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory `{}`", dir.display()))?;
    Ok(!existed)
}

/// Transform one source into `output`, choosing the transform by extension.
///
/// With `minify` off every kind is copied verbatim. Text that is not valid
/// UTF-8 is decoded lossily, so stray bytes become U+FFFD.
pub fn process_asset(source: &Path, output: &Path, minify: bool) -> Result<AssetKind> {
    let kind = AssetKind::from_path(source);

    if minify && kind.is_minifiable() {
        let bytes =
            fs::read(source).with_context(|| format!("Failed to read `{}`", source.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let minified = minify_by_kind(kind, &content).unwrap_or_else(|| content.into_owned());
        fs::write(output, minified)
            .with_context(|| format!("Failed to write `{}`", output.display()))?;
    } else {
        fs::copy(source, output).with_context(|| {
            format!(
                "Failed to copy `{}` to `{}`",
                source.display(),
                output.display()
            )
        })?;
    }

    Ok(kind)
}

/// Process every configured source in order.
///
/// Sources resolve against `root`; each lands in `output_dir` under its
/// file name. Missing sources are skipped and per-file failures are
/// recorded, so one bad file never stops the rest.
pub fn process_sources(
    root: &Path,
    sources: &[PathBuf],
    output_dir: &Path,
    minify: bool,
) -> AssetReport {
    let mut report = AssetReport::default();

    for source in sources {
        let source_path = root.join(source);
        if !source_path.is_file() {
            log!("warn"; "source not found, skipping: {}", source.display());
            report.skipped.push(source.clone());
            continue;
        }

        let output = output_dir.join(file_name_of(source));
        match process_asset(&source_path, &output, minify) {
            Ok(kind) => {
                let action = if minify && kind.is_minifiable() {
                    "minify"
                } else {
                    "copy"
                };
                log!("build"; "{} {}: {}", action, kind.label(), source.display());
                debug!("build"; "{} -> {}", source_path.display(), output.display());
                report.processed.push(ProcessedAsset {
                    source: source.clone(),
                    output,
                    kind,
                });
            }
            Err(error) => {
                log!("error"; "{}: {:#}", source.display(), error);
                report.failed.push(FailedAsset {
                    source: source.clone(),
                    error,
                });
            }
        }
    }

    report
}

/// Log the size of each produced output, skipping any that vanished.
pub fn report_sizes(report: &AssetReport) {
    for asset in &report.processed {
        let Ok(meta) = fs::metadata(&asset.output) else {
            continue;
        };
        log!(
            "build";
            "  {}: {}",
            file_name_of(&asset.output).to_string_lossy(),
            format_kb(meta.len())
        );
    }
}
