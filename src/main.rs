//! sitepush - minify static web assets and publish them to a pages branch.

mod asset;
mod cli;
mod config;
mod logger;
mod package;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site, deploy::DeployError, deploy::deploy_site};
use config::ProjectConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = run(&cli) {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ProjectConfig::load(cli)?;
    debug!("config"; "project root: {}", config.get_root().display());

    match cli.command {
        Commands::Build => build_site(&config).map(|_| ()),
        Commands::Deploy => deploy_site(&config).map(|_| ()),
    }
}

/// Log a fatal error, followed by remediation steps when it has any.
fn report_error(err: &anyhow::Error) {
    log!("error"; "{:#}", err);
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        for hint in deploy.hints() {
            eprintln!("  {hint}");
        }
    }
}
