use transmerge::paths;

use crate::merge::merge_culture;
use crate::validation::{validate_cultures, validate_folder_path};

#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub external: String,
    pub to: String,
    pub external_root: String,
    pub archive_root: String,
    pub output_root: String,
    pub cultures: Vec<String>,
}

/// Run the update-external command: merge an external deliverable folder
/// (as the authoritative set) into an archived branch folder.
pub fn run_update_command(opts: UpdateOptions) -> Result<(), String> {
    let external_folder = paths::archive_folder(&opts.external_root, &opts.external);
    let branch_folder = paths::archive_folder(&opts.archive_root, &opts.to);
    validate_folder_path(&external_folder)?;
    validate_folder_path(&branch_folder)?;
    validate_cultures(&opts.cultures)?;

    let output_dir = paths::merged_output_dir(&opts.output_root, &external_folder, &branch_folder);
    for culture in &opts.cultures {
        merge_culture(culture, &external_folder, &branch_folder, &output_dir);
    }

    Ok(())
}
