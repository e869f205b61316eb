//! Git operations for publishing build output.
//!
//! Every operation goes through a repository handle addressed by its root
//! path. Commands run with that root as their working directory, so the
//! process-wide current directory is never touched.

mod repo;

pub use repo::GitRepo;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the git executable looked up on `PATH`.
pub const GIT: &str = "git";

/// Locate the git executable.
pub fn find_git() -> Option<PathBuf> {
    which::which(GIT).ok()
}

/// A working tree the deploy pipeline can query and publish from.
///
/// `GitRepo` drives the git CLI; tests substitute a recording fake.
pub trait VcsRepo {
    /// Root directory of the working tree.
    fn root(&self) -> &Path;

    /// Whether `root` is inside any git repository (`git rev-parse --git-dir`).
    fn is_repository(&self) -> bool;

    /// Whether `root` itself owns version-control metadata (`root/.git`).
    fn has_metadata(&self) -> bool {
        self.root().join(".git").exists()
    }

    /// Porcelain status; empty when the tree matches the index and HEAD.
    fn status(&self) -> Result<String>;

    /// Configured remote names.
    fn remote_names(&self) -> Result<Vec<String>>;

    /// Remotes with their fetch/push URLs (`git remote -v`).
    fn remote_list(&self) -> Result<String>;

    /// URL of the named remote.
    fn remote_url(&self, remote: &str) -> Result<String>;

    fn init(&self) -> Result<()>;

    fn add_remote(&self, remote: &str, url: &str) -> Result<()>;

    /// Stage every file under the root.
    fn stage_all(&self) -> Result<()>;

    fn commit(&self, message: &str) -> Result<()>;

    /// Push the local HEAD to `remote/branch`, replacing the remote tip.
    fn force_push(&self, remote: &str, branch: &str) -> Result<()>;
}
