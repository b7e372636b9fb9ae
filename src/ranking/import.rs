use super::{ClusterBatch, ClusterCandidate};
use crate::scoring::ExistingSolution;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const LIST_SEPARATOR: char = '|';
const SOLUTION_SEPARATOR: char = ':';

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read cluster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid cluster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid cluster JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid cluster row on line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}

impl ClusterBatch {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Loads a batch from disk; `.csv` files are parsed as rows, anything else as JSON.
pub fn load_batch(path: impl AsRef<Path>) -> Result<ClusterBatch, ImportError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        import_csv(reader, None)
    } else {
        ClusterBatch::from_json_reader(reader)
    }
}

/// Reads `id,label,size,emotional_intensity,keywords,existing_solutions` rows.
///
/// Keywords are `|`-separated; solutions are `|`-separated `name:limitation`
/// entries (the limitation may be omitted).
pub fn import_csv<R: Read>(
    reader: R,
    total_data_size: Option<u64>,
) -> Result<ClusterBatch, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut clusters = Vec::new();

    for (idx, record) in csv_reader.deserialize::<ClusterRow>().enumerate() {
        let row = record?;
        // header occupies line 1
        let line = idx + 2;
        if row.id.is_empty() {
            return Err(ImportError::InvalidRow {
                line,
                reason: "cluster id is empty".to_string(),
            });
        }
        clusters.push(row.into_candidate());
    }

    Ok(ClusterBatch {
        total_data_size,
        clusters,
    })
}

#[derive(Debug, Deserialize)]
struct ClusterRow {
    id: String,
    #[serde(default)]
    label: String,
    size: u64,
    emotional_intensity: f64,
    #[serde(default)]
    keywords: String,
    #[serde(default)]
    existing_solutions: String,
}

impl ClusterRow {
    fn into_candidate(self) -> ClusterCandidate {
        let keywords = split_list(&self.keywords).map(str::to_string).collect();
        let existing_solutions = split_list(&self.existing_solutions)
            .map(|entry| match entry.split_once(SOLUTION_SEPARATOR) {
                Some((name, limitation)) => ExistingSolution::new(name.trim(), limitation.trim()),
                None => ExistingSolution::new(entry, ""),
            })
            .collect();

        ClusterCandidate {
            id: self.id,
            label: self.label,
            size: self.size,
            emotional_intensity: self.emotional_intensity,
            keywords,
            existing_solutions,
        }
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}
