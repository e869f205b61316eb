use super::{GIT, VcsRepo};
use crate::{
    exec,
    utils::exec::{EMPTY_FILTER, SILENT_FILTER},
};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Git working tree driven through the git CLI.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Handle for the working tree at `root`. The directory need not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Run a query and return its trimmed stdout.
    fn query(&self, args: &[&str]) -> Result<String> {
        let output = crate::utils::exec::Cmd::new(GIT)
            .args(args)
            .cwd(&self.root)
            .filter(&EMPTY_FILTER)
            .run()?;
        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl VcsRepo for GitRepo {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_repository(&self) -> bool {
        exec!(filter=&SILENT_FILTER; &self.root; GIT; "rev-parse", "--git-dir").is_ok()
    }

    fn status(&self) -> Result<String> {
        self.query(&["status", "--porcelain"])
    }

    fn remote_names(&self) -> Result<Vec<String>> {
        let names = self.query(&["remote"])?;
        Ok(names
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect())
    }

    fn remote_list(&self) -> Result<String> {
        self.query(&["remote", "-v"])
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let url = self.query(&["remote", "get-url", remote])?;
        if url.trim().is_empty() {
            bail!("remote `{remote}` has no URL");
        }
        Ok(url.trim().to_string())
    }

    fn init(&self) -> Result<()> {
        exec!(inherit; &self.root; GIT; "init")?;
        Ok(())
    }

    fn add_remote(&self, remote: &str, url: &str) -> Result<()> {
        exec!(inherit; &self.root; GIT; "remote", "add", remote, url)?;
        Ok(())
    }

    fn stage_all(&self) -> Result<()> {
        exec!(inherit; &self.root; GIT; "add", ".")?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            bail!("Commit message cannot be empty");
        }
        exec!(inherit; &self.root; GIT; "commit", "-m", message)?;
        Ok(())
    }

    fn force_push(&self, remote: &str, branch: &str) -> Result<()> {
        let refspec = format!("HEAD:{branch}");
        exec!(inherit; &self.root; GIT; "push", "-f", remote, &refspec)?;
        Ok(())
    }
}
