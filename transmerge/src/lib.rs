#![forbid(unsafe_code)]
//! Branch archive, merge, and missing-string toolkit for flat JSON
//! translation files.
//!
//! Translation files are flat JSON objects of string keys to string values,
//! one file per culture (`en-us.json`, `es-es.json`) inside per-branch
//! folders. Merging overlays an incoming set on a destination set: every
//! destination-only value is tagged with the `($)` marker as "not yet
//! confirmed", every incoming value wins verbatim. Extraction collects the
//! entries still carrying the marker for hand-off to translators.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use transmerge::{load_translation_map, merge_maps, save_translation_map};
//!
//! let from = load_translation_map("i18n/feature-x/en-us.json")?;
//! let to = load_translation_map("i18n/develop/en-us.json")?;
//!
//! let merged = merge_maps(&from, &to);
//! save_translation_map("i18n-merged/i18n-feature-x---i18n-develop/en-us.json", &merged)?;
//! # Ok::<(), transmerge::Error>(())
//! ```
//!
//! # Guarantees
//!
//! - Merged key set = union of both inputs; the incoming set always wins on
//!   conflict.
//! - Marking is idempotent: an already-marked value is never double-marked.
//! - Output paths are pure functions of their inputs, so re-running the
//!   same operation lands on the same file with identical bytes.

pub mod archive;
pub mod branch;
pub mod error;
pub mod operations;
pub mod paths;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    archive::{load_translation_map, save_translation_map},
    error::Error,
    operations::{extract_marked, merge_maps},
    types::{MARKER, TranslationMap, is_marked, mark},
};
