//! Batch processing: descriptions in, JSON records out.
//!
//! One record per short description, written as
//! `description_{index}.json` (1-based) in the output directory:
//!
//! ```json
//! {
//!   "short_description": "закат над морем",
//!   "description": "Солнце медленно тонет в волнах. ..."
//! }
//! ```
//!
//! A failure on one description is logged and skipped; the rest of the
//! batch still runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::generate::{build_prompt, GenerationParams, TextGenerator};
use crate::shaper::Shaper;

/// One shaped description, as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    /// The input description.
    pub short_description: String,
    /// The shaped, expanded description.
    pub description: String,
}

/// Outcome of [`run_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Paths of the records written, in input order.
    pub written: Vec<PathBuf>,
    /// Number of descriptions that failed.
    pub failed: usize,
}

impl BatchSummary {
    /// Number of records written.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }
}

/// Load short descriptions from a file path or a literal string.
///
/// If `src` names an existing file, its trimmed non-empty lines are
/// returned. Otherwise `src` itself is the single description; a blank
/// `src` yields no descriptions.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if `src` is a file that cannot be read.
pub fn load_descriptions(src: &str) -> Result<Vec<String>> {
    let path = Path::new(src);
    if path.is_file() {
        let contents = fs::read_to_string(path)?;
        let descriptions: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(path = %path.display(), count = descriptions.len(), "loaded descriptions");
        return Ok(descriptions);
    }

    let src = src.trim();
    if src.is_empty() {
        return Ok(vec![]);
    }
    Ok(vec![src.to_string()])
}

/// Generate and shape one description.
///
/// # Errors
///
/// Returns [`crate::Error::EmptySeed`] for a blank description, or whatever
/// the generator reports.
pub fn describe(
    generator: &dyn TextGenerator,
    params: &GenerationParams,
    shaper: &Shaper,
    short_description: &str,
) -> Result<DescriptionRecord> {
    let prompt = build_prompt(short_description, shaper.window().min())?;
    let raw = generator.generate(short_description, &prompt, params)?;
    let description = shaper.shape(short_description, Some(&raw));

    Ok(DescriptionRecord {
        short_description: short_description.to_string(),
        description,
    })
}

/// Write a record to `out_dir/description_{index}.json`.
///
/// The directory is created if needed. Non-ASCII text is written as-is.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] or [`crate::Error::Json`].
pub fn save_record(record: &DescriptionRecord, index: usize, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("description_{index}.json"));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Describe every entry in `descriptions` and write one record each.
///
/// Records are numbered from 1 in input order; a failed entry keeps its
/// number, so numbering matches input lines.
pub fn run_batch(
    generator: &dyn TextGenerator,
    params: &GenerationParams,
    shaper: &Shaper,
    descriptions: &[String],
    out_dir: &Path,
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    let total = descriptions.len();

    for (i, short_description) in descriptions.iter().enumerate() {
        let index = i + 1;
        info!(index, total, description = %short_description, "processing");

        let result = describe(generator, params, shaper, short_description)
            .and_then(|record| save_record(&record, index, out_dir));

        match result {
            Ok(path) => {
                info!(path = %path.display(), "saved");
                summary.written.push(path);
            }
            Err(err) => {
                warn!(index, description = %short_description, error = %err, "failed to process description");
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::NullGenerator;

    #[test]
    fn test_literal_description() {
        let descriptions = load_descriptions("  кот на окне  ").unwrap();
        assert_eq!(descriptions, ["кот на окне"]);
    }

    #[test]
    fn test_blank_literal_yields_nothing() {
        assert!(load_descriptions("   ").unwrap().is_empty());
    }

    #[test]
    fn test_describe_with_null_generator() {
        let record = describe(
            &NullGenerator,
            &GenerationParams::default(),
            &Shaper::default(),
            "кот на окне",
        )
        .unwrap();

        assert_eq!(record.short_description, "кот на окне");
        assert!(record.description.starts_with("кот на окне Это придаёт"));
    }

    #[test]
    fn test_describe_rejects_blank_seed() {
        let result = describe(
            &NullGenerator,
            &GenerationParams::default(),
            &Shaper::default(),
            " ",
        );
        assert!(matches!(result, Err(crate::Error::EmptySeed)));
    }

    #[test]
    fn test_record_json_shape() {
        let record = DescriptionRecord {
            short_description: "кот".to_string(),
            description: "Кот спит.".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["short_description"], "кот");
        assert_eq!(json["description"], "Кот спит.");
    }
}
