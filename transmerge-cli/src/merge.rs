use std::path::Path;

use transmerge::{load_translation_map, merge_maps, paths, save_translation_map};

use crate::validation::{validate_cultures, validate_folder_path};

#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub from: String,
    pub to: String,
    pub archive_root: String,
    pub output_root: String,
    pub cultures: Vec<String>,
}

/// Run the merge command: merge one archived folder into another, one
/// culture at a time.
pub fn run_merge_command(opts: MergeOptions) -> Result<(), String> {
    let from_folder = paths::archive_folder(&opts.archive_root, &opts.from);
    let to_folder = paths::archive_folder(&opts.archive_root, &opts.to);
    validate_folder_path(&from_folder)?;
    validate_folder_path(&to_folder)?;
    validate_cultures(&opts.cultures)?;

    let output_dir = paths::merged_output_dir(&opts.output_root, &from_folder, &to_folder);
    for culture in &opts.cultures {
        merge_culture(culture, &from_folder, &to_folder, &output_dir);
    }

    Ok(())
}

/// Merge one culture's file from `from_folder` over `to_folder` into
/// `output_dir`. Failures are reported and do not affect other cultures.
pub fn merge_culture(culture: &str, from_folder: &str, to_folder: &str, output_dir: &Path) {
    let source_path = paths::culture_file(from_folder, culture);
    let from = match load_translation_map(&source_path) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("❌ {}: {}", source_path.display(), e);
            return;
        }
    };

    let destination_path = paths::culture_file(to_folder, culture);
    let to = match load_translation_map(&destination_path) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("❌ {}: {}", destination_path.display(), e);
            return;
        }
    };

    let merged = merge_maps(&from, &to);
    let output_path = paths::culture_file(output_dir, culture);
    match save_translation_map(&output_path, &merged) {
        Ok(()) => println!(
            "✅ File {} was created with {} entries",
            output_path.display(),
            merged.len()
        ),
        Err(e) => eprintln!("❌ {}: {}", output_path.display(), e),
    }
}
