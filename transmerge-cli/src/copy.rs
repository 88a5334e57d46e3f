use std::path::Path;

use ignore::WalkBuilder;
use transmerge::branch::{archive_folder_name, current_branch};

#[derive(Debug, Clone)]
pub struct CopyOptions {
    pub repository: String,
    pub i18n_folder: String,
    pub archive_root: String,
}

/// Run the copy-branch command: archive the active branch's translation
/// files under a folder named after the branch.
pub fn run_copy_command(opts: CopyOptions) -> Result<(), String> {
    let branch = current_branch(&opts.repository)
        .map_err(|e| format!("Cannot read branch from {}: {}", opts.repository, e))?;
    println!("Current branch: {}", branch);

    let source = Path::new(&opts.repository).join(&opts.i18n_folder);
    if !source.is_dir() {
        return Err(format!(
            "Translation folder does not exist: {}",
            source.display()
        ));
    }

    let destination = Path::new(&opts.archive_root).join(archive_folder_name(&branch));
    if destination.exists() {
        std::fs::remove_dir_all(&destination)
            .map_err(|e| format!("Cannot remove {}: {}", destination.display(), e))?;
        println!("📁 {} folder was removed", destination.display());
    }

    copy_tree(&source, &destination)?;
    println!(
        "✅ Translation files were copied to {}",
        destination.display()
    );
    Ok(())
}

// Copy every file under `source` into `destination`, keeping the layout.
// Standard filters are disabled so ignored files and dotfiles copy too.
fn copy_tree(source: &Path, destination: &Path) -> Result<(), String> {
    for entry in WalkBuilder::new(source).standard_filters(false).build() {
        let entry = entry.map_err(|e| format!("Cannot walk {}: {}", source.display(), e))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| format!("Cannot resolve {}: {}", entry.path().display(), e))?;
        let target = destination.join(relative);

        if entry.file_type().is_some_and(|t| t.is_dir()) {
            std::fs::create_dir_all(&target)
                .map_err(|e| format!("Cannot create {}: {}", target.display(), e))?;
        } else {
            std::fs::copy(entry.path(), &target)
                .map_err(|e| format!("Cannot copy {}: {}", entry.path().display(), e))?;
        }
    }

    Ok(())
}
