use serde::{Deserialize, Serialize};

/// Smallest batch whose market-size read is trusted over the fixed estimate.
pub const PRELIMINARY_SAMPLE_SIZE: u64 = 50;
/// Batch size from which clustering results are considered stable.
pub const RELIABLE_SAMPLE_SIZE: u64 = 200;

/// Confidence band for a batch, judged from its total signal count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQualityLevel {
    Reliable,
    Preliminary,
    Exploratory,
}

impl DataQualityLevel {
    pub fn from_total_size(total_data_size: u64) -> Self {
        if total_data_size >= RELIABLE_SAMPLE_SIZE {
            Self::Reliable
        } else if total_data_size >= PRELIMINARY_SAMPLE_SIZE {
            Self::Preliminary
        } else {
            Self::Exploratory
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataQualityLevel::Reliable => "reliable",
            DataQualityLevel::Preliminary => "preliminary",
            DataQualityLevel::Exploratory => "exploratory",
        }
    }

    /// Guidance shown alongside non-reliable batches.
    pub fn advisory(&self) -> Option<String> {
        match self {
            DataQualityLevel::Reliable => None,
            DataQualityLevel::Preliminary => Some(format!(
                "grow the sample to {RELIABLE_SAMPLE_SIZE}+ signals for more stable clusters and recommendations"
            )),
            DataQualityLevel::Exploratory => Some(format!(
                "fewer than {PRELIMINARY_SAMPLE_SIZE} signals; use more relevant keywords or collect more data before relying on these results"
            )),
        }
    }
}
