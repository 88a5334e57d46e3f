//! Current-branch detection for naming archive folders.
//!
//! Reads `.git/HEAD` directly; there is no version control integration
//! beyond that.

use std::path::Path;

use crate::error::Error;

const HEAD_REF_PREFIX: &str = "ref: refs/heads/";

/// Returns the branch currently checked out in `repo`.
///
/// A detached HEAD yields the raw commit id instead of a branch name.
pub fn current_branch<P: AsRef<Path>>(repo: P) -> Result<String, Error> {
    let head = std::fs::read_to_string(repo.as_ref().join(".git").join("HEAD"))?;
    let head = head.trim();
    Ok(head.strip_prefix(HEAD_REF_PREFIX).unwrap_or(head).to_string())
}

/// Folder name a branch archives under.
///
/// Feature branches (`feature/login-form`) archive under the segment after
/// the slash; any other name passes through unchanged.
pub fn archive_folder_name(branch: &str) -> &str {
    if branch.contains("feature") {
        branch.split('/').nth(1).unwrap_or(branch)
    } else {
        branch
    }
}
