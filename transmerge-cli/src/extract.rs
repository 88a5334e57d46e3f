use std::path::Path;

use transmerge::{extract_marked, load_translation_map, paths, save_translation_map};

use crate::validation::{validate_cultures, validate_folder_path};

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub folder: String,
    pub archive_root: String,
    pub output_root: String,
    pub cultures: Vec<String>,
}

/// Run the extract-missing command: collect the entries still carrying the
/// marker, one culture at a time.
pub fn run_extract_command(opts: ExtractOptions) -> Result<(), String> {
    let folder = paths::archive_folder(&opts.archive_root, &opts.folder);
    validate_folder_path(&folder)?;
    validate_cultures(&opts.cultures)?;

    let output_dir = paths::missing_output_dir(&opts.output_root, &folder);
    for culture in &opts.cultures {
        extract_culture(culture, &folder, &output_dir);
    }

    Ok(())
}

// Per-culture extraction; failures are reported and isolated, matching the
// merge command.
fn extract_culture(culture: &str, folder: &str, output_dir: &Path) {
    let source_path = paths::culture_file(folder, culture);
    let map = match load_translation_map(&source_path) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("❌ {}: {}", source_path.display(), e);
            return;
        }
    };

    let missing = extract_marked(&map);
    let output_path = paths::culture_file(output_dir, culture);
    match save_translation_map(&output_path, &missing) {
        Ok(()) => println!(
            "✅ File {} was created with {} entries",
            output_path.display(),
            missing.len()
        ),
        Err(e) => eprintln!("❌ {}: {}", output_path.display(), e),
    }
}
