use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validate that a folder exists and is a directory
pub fn validate_folder_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("Folder does not exist: {}", path));
    }

    if !path_obj.is_dir() {
        return Err(format!("Path is not a folder: {}", path));
    }

    Ok(())
}

/// Validate a culture tag using unic-langid
pub fn validate_culture(culture: &str) -> Result<(), String> {
    if culture.is_empty() {
        return Err("Culture cannot be empty".to_string());
    }

    match culture.parse::<LanguageIdentifier>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "Invalid culture: {}. Expected a BCP 47 language tag like en-us",
            culture
        )),
    }
}

/// Validate the culture list of one invocation
pub fn validate_cultures(cultures: &[String]) -> Result<(), String> {
    if cultures.is_empty() {
        return Err("At least one culture is required".to_string());
    }

    for culture in cultures {
        validate_culture(culture)?;
    }

    Ok(())
}
