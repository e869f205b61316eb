//! Deployment of the build output to a pages branch.
//!
//! Stages run in order and the first failure halts the deploy:
//!
//! ```text
//! tooling -> environment -> remote -> build -> publish -> summary
//! ```
//!
//! Publishing treats the output directory as its own repository. Its
//! history is independent of the project's, and every deploy replaces the
//! remote branch tip with a force-push.

use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::{
    cli::build::{BuildReport, build_site},
    config::ProjectConfig,
    debug, log,
    logger::rule,
    package::ProjectMeta,
    utils::{
        date::DateTimeUtc,
        git::{GitRepo, VcsRepo, find_git},
        plural_count,
    },
};

const RULE_WIDTH: usize = 60;

/// Precondition failures that stop a deploy before anything is published.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("`git` executable not found on PATH")]
    GitNotFound,

    #[error("not a git repository: {}", .path.display())]
    NotARepository { path: PathBuf, remote: String },

    #[error("remote `{remote}` is not configured")]
    MissingRemote { remote: String },

    #[error("output directory missing after build: {}", .path.display())]
    MissingOutput { path: PathBuf },
}

impl DeployError {
    /// Remediation steps shown below the error.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::GitNotFound => {
                vec!["install git (https://git-scm.com/downloads) and make sure it is on PATH".into()]
            }
            Self::NotARepository { remote, .. } => vec![
                "git init".into(),
                format!("git remote add {remote} <your-repo-url>"),
            ],
            Self::MissingRemote { remote } => {
                vec![format!("git remote add {remote} <your-repo-url>")]
            }
            Self::MissingOutput { .. } => {
                vec!["check `output` under [build] in sitepush.toml".into()]
            }
        }
    }
}

/// Result of a successful deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// A new commit was force-pushed.
    Published,
    /// The staged output matched the last deploy; nothing was pushed.
    NothingToDeploy,
}

/// Build the project and publish its output directory.
pub fn deploy_site(config: &ProjectConfig) -> Result<DeployOutcome> {
    let git = find_git().ok_or(DeployError::GitNotFound)?;
    debug!("git"; "using {}", git.display());

    let project = GitRepo::open(config.get_root());
    let output = GitRepo::open(config.output_dir());
    Deployer::new(config, &project, &output).run()
}

// ============================================================================
// Deployer
// ============================================================================

/// Drives one deploy over a project repository and an output repository.
pub struct Deployer<'a, P, O> {
    config: &'a ProjectConfig,
    project: &'a P,
    output: &'a O,
}

impl<'a, P: VcsRepo, O: VcsRepo> Deployer<'a, P, O> {
    pub fn new(config: &'a ProjectConfig, project: &'a P, output: &'a O) -> Self {
        Self {
            config,
            project,
            output,
        }
    }

    pub fn run(&self) -> Result<DeployOutcome> {
        log!("deploy"; "starting deploy");
        rule(RULE_WIDTH);

        self.check_environment()?;
        self.check_remote()?;
        let report = self.build()?;
        let outcome = self.publish()?;

        print_summary(&report.meta, &self.config.deploy.branch, outcome);
        Ok(outcome)
    }

    /// The project root must be a repository; uncommitted changes only warn.
    fn check_environment(&self) -> Result<()> {
        log!("deploy"; "checking git repository");
        if !self.project.is_repository() {
            return Err(DeployError::NotARepository {
                path: self.project.root().to_path_buf(),
                remote: self.config.deploy.remote.clone(),
            }
            .into());
        }
        log!("git"; "repository ok");

        match self.project.status() {
            Ok(status) if status.trim().is_empty() => log!("git"; "working tree clean"),
            Ok(status) => {
                log!("warn"; "uncommitted changes:");
                for line in status.lines() {
                    eprintln!("  {line}");
                }
                log!("warn"; "consider committing them before deploying");
            }
            Err(err) => log!("warn"; "could not check git status: {:#}", err),
        }
        Ok(())
    }

    /// The configured remote must exist by exact name.
    fn check_remote(&self) -> Result<()> {
        let remote = &self.config.deploy.remote;
        log!("deploy"; "checking remote `{}`", remote);

        let names = self
            .project
            .remote_names()
            .context("Failed to list git remotes")?;
        if !names.iter().any(|name| name == remote) {
            return Err(DeployError::MissingRemote {
                remote: remote.clone(),
            }
            .into());
        }
        log!("git"; "remote `{}` ok", remote);

        match self.project.remote_list() {
            Ok(list) => debug!("git"; "remotes:\n{}", list),
            Err(err) => debug!("git"; "could not list remote URLs: {:#}", err),
        }
        Ok(())
    }

    fn build(&self) -> Result<BuildReport> {
        log!("deploy"; "building project");
        let report = build_site(self.config)?;
        debug!(
            "deploy";
            "built {}, manifest at {}",
            plural_count(report.assets.processed.len(), "file"),
            report.manifest.display()
        );
        if !report.output_dir.is_dir() {
            return Err(DeployError::MissingOutput {
                path: report.output_dir,
            }
            .into());
        }
        Ok(report)
    }

    /// Stage, commit and force-push the output directory.
    fn publish(&self) -> Result<DeployOutcome> {
        let deploy = &self.config.deploy;
        log!("deploy"; "publishing {} to {}", self.config.build.output.display(), deploy.branch);

        if !self.output.has_metadata() {
            self.output.init()?;
            self.register_remote()?;
        } else if !self
            .output
            .remote_names()?
            .iter()
            .any(|name| *name == deploy.remote)
        {
            self.register_remote()?;
        }

        self.output.stage_all()?;

        match self.output.status() {
            Ok(status) if status.trim().is_empty() => {
                log!("deploy"; "nothing to deploy");
                return Ok(DeployOutcome::NothingToDeploy);
            }
            Ok(_) => {}
            Err(err) => debug!("git"; "status check failed, publishing anyway: {:#}", err),
        }

        let message = deploy.commit_message(DateTimeUtc::now());
        self.output.commit(&message)?;
        self.output.force_push(&deploy.remote, &deploy.branch)?;

        log!("deploy"; "published to {}/{}", deploy.remote, deploy.branch);
        Ok(DeployOutcome::Published)
    }

    /// Copy the project's remote URL into the output repository.
    fn register_remote(&self) -> Result<()> {
        let remote = &self.config.deploy.remote;
        let url = self
            .project
            .remote_url(remote)
            .with_context(|| format!("Failed to resolve URL of remote `{remote}`"))?;
        debug!("git"; "registering {} -> {}", remote, url);
        self.output.add_remote(remote, &url)
    }
}

fn print_summary(meta: &ProjectMeta, branch: &str, outcome: DeployOutcome) {
    println!();
    rule(RULE_WIDTH);
    match outcome {
        DeployOutcome::Published => log!("deploy"; "deploy complete"),
        DeployOutcome::NothingToDeploy => log!("deploy"; "site already up to date"),
    }
    rule(RULE_WIDTH);
    log!("deploy"; "project:    {}", meta.name);
    log!("deploy"; "version:    {}", meta.version);
    log!("deploy"; "repository: {}", meta.repository_url());
    log!("deploy"; "homepage:   {}", meta.homepage_url());
    println!();
    log!("deploy"; "GitHub Pages may take a few minutes to update");
    log!("deploy"; "first deploy? enable Pages for the `{}` branch in the repository settings", branch);
    rule(RULE_WIDTH);
}
