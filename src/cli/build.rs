//! Asset build orchestration.
//!
//! Pipeline: metadata -> output dir -> sources -> manifest -> size report

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    asset::{
        AssetReport, BuildManifest, MANIFEST_FILE, prepare_output_dir, process_sources,
        report_sizes,
    },
    config::ProjectConfig,
    debug, log,
    logger::rule,
    package::ProjectMeta,
    utils::{date::DateTimeUtc, plural_count},
};

const RULE_WIDTH: usize = 50;

/// Outcome of a build.
#[derive(Debug)]
pub struct BuildReport {
    /// Absolute output directory.
    pub output_dir: PathBuf,
    pub assets: AssetReport,
    /// Path of the written `deploy-info.json`.
    pub manifest: PathBuf,
    /// Project metadata read at the start of the build.
    pub meta: ProjectMeta,
}

/// Build every configured source into the output directory.
///
/// Project metadata is read first so a broken `package.json` fails the
/// build before anything is written. Per-file failures are reported in
/// the returned [`BuildReport`] and do not fail the build.
pub fn build_site(config: &ProjectConfig) -> Result<BuildReport> {
    let meta = ProjectMeta::load(&config.metadata_path())?;
    let build = &config.build;

    log!("build"; "building {} v{}", meta.name, meta.version);
    rule(RULE_WIDTH);

    let output_dir = config.output_dir();
    if prepare_output_dir(&output_dir)? {
        log!("build"; "created output directory {}", build.output.display());
    } else {
        log!("build"; "output directory exists: {}", build.output.display());
    }

    let assets = process_sources(config.get_root(), &build.sources, &output_dir, build.minify);

    let manifest = BuildManifest::new(DateTimeUtc::now(), &meta.version, &build.sources, &build.output);
    let manifest_path = manifest.write(&output_dir)?;
    log!("build"; "wrote {}", MANIFEST_FILE);
    debug!("build"; "manifest at {}", manifest_path.display());
    debug!("build"; "build time {}", manifest.build_time);

    rule(RULE_WIDTH);
    log!(
        "build";
        "done: {} processed, {} skipped, {} failed",
        plural_count(assets.processed.len(), "file"),
        assets.skipped.len(),
        assets.failed.len()
    );
    if assets.has_failures() {
        log!("warn"; "{} could not be processed:", plural_count(assets.failed.len(), "file"));
        for failed in &assets.failed {
            eprintln!("  {}: {:#}", failed.source.display(), failed.error);
        }
    }
    log!("build"; "output in {}/", build.output.display());
    report_sizes(&assets);

    Ok(BuildReport {
        output_dir,
        assets,
        manifest: manifest_path,
        meta,
    })
}
