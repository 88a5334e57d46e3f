//! Deterministic destination naming for merge and extraction outputs.
//!
//! All functions here are pure: the same inputs always name the same
//! destination, so re-running an operation overwrites its own output and
//! different source/destination pairs never share a folder.

use std::path::{Path, PathBuf};

/// Separator between the two flattened folder names of a merge output.
pub const MERGE_SEPARATOR: &str = "---";

/// Collapses a folder path into a single directory-name component.
///
/// `i18n/release-2` becomes `i18n-release-2`.
pub fn flatten_folder(folder: &str) -> String {
    folder.replace('/', "-")
}

/// Addresses a named folder inside an archive tree as `<root>/<name>`.
///
/// Always forward slashes; this string feeds [`flatten_folder`], not the
/// platform path APIs.
pub fn archive_folder(root: &str, name: &str) -> String {
    format!("{}/{}", root, name)
}

/// Directory that receives the merge of `from` into `to`.
pub fn merged_output_dir<P: AsRef<Path>>(root: P, from: &str, to: &str) -> PathBuf {
    root.as_ref().join(format!(
        "{}{}{}",
        flatten_folder(from),
        MERGE_SEPARATOR,
        flatten_folder(to)
    ))
}

/// Directory that receives the missing-string extraction of `folder`.
pub fn missing_output_dir<P: AsRef<Path>>(root: P, folder: &str) -> PathBuf {
    root.as_ref().join(flatten_folder(folder))
}

/// Path of one culture's translation file inside `folder`.
pub fn culture_file<P: AsRef<Path>>(folder: P, culture: &str) -> PathBuf {
    folder.as_ref().join(format!("{}.json", culture))
}
