use std::path::Path;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub root: String,
}

/// Run a list command: print the folders directly under `root`, sorted.
pub fn run_list_command(opts: ListOptions) -> Result<(), String> {
    let root = Path::new(&opts.root);
    let entries =
        std::fs::read_dir(root).map_err(|e| format!("Cannot read {}: {}", root.display(), e))?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Cannot read {}: {}", root.display(), e))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    folders.sort();
    for folder in folders {
        println!("📁 {}", folder);
    }

    Ok(())
}
