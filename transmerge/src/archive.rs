//! Reading and writing archived translation files.
//!
//! The archive is plain directories of `<culture>.json` files. Each file is
//! a flat JSON object of string keys to string values; nothing else ties the
//! tree together, the directory and file naming is the addressing scheme.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::types::TranslationMap;

/// Loads a flat JSON object of string → string from `path`.
///
/// Keys and values are trimmed of surrounding whitespace. A value that is
/// not a JSON string is rejected with [`Error::DataMismatch`]; a missing
/// file surfaces as [`Error::Io`] and malformed JSON as [`Error::Parse`].
pub fn load_translation_map<P: AsRef<Path>>(path: P) -> Result<TranslationMap, Error> {
    let file = File::open(path.as_ref())?;
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(BufReader::new(file))?;

    let mut map = TranslationMap::new();
    for (key, value) in &raw {
        let Some(value) = value.as_str() else {
            return Err(Error::data_mismatch(format!(
                "value for key `{}` is not a string",
                key
            )));
        };
        map.insert(key, value);
    }

    Ok(map)
}

/// Writes `map` to `path` as pretty-printed JSON.
///
/// The destination directory is created first if absent. Writing the same
/// map to the same path again overwrites it with identical bytes.
pub fn save_translation_map<P: AsRef<Path>>(path: P, map: &TranslationMap) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = File::create(path)?;
    serde_json::to_writer_pretty(&mut writer, map)?;
    Ok(())
}
