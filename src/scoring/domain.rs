use serde::{Deserialize, Serialize};

/// Competitor entry extracted by the upstream qualitative analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingSolution {
    pub name: String,
    #[serde(default)]
    pub limitation: String,
}

impl ExistingSolution {
    pub fn new(name: impl Into<String>, limitation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limitation: limitation.into(),
        }
    }
}

/// Cluster-level inputs for a single scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSignals {
    pub cluster_size: u64,
    pub total_data_size: u64,
    pub emotional_intensity: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub existing_solutions: Vec<ExistingSolution>,
}

/// Discrete priority band derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub const HIGH_THRESHOLD: f64 = 3.5;
    pub const MEDIUM_THRESHOLD: f64 = 2.5;

    pub fn from_overall(overall: f64) -> Self {
        if overall >= Self::HIGH_THRESHOLD {
            Self::High
        } else if overall >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }

    pub fn ordered() -> [PriorityLevel; 3] {
        [Self::High, Self::Medium, Self::Low]
    }
}

/// Coarse reading of the competition sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitiveLandscape {
    BlueOcean,
    Moderate,
    RedOcean,
}

impl CompetitiveLandscape {
    pub fn from_competition(competition: f64) -> Self {
        if competition >= 4.5 {
            Self::BlueOcean
        } else if competition >= 3.0 {
            Self::Moderate
        } else {
            Self::RedOcean
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompetitiveLandscape::BlueOcean => "blue ocean",
            CompetitiveLandscape::Moderate => "moderate",
            CompetitiveLandscape::RedOcean => "red ocean",
        }
    }
}

/// Scoring output for one cluster. Every number is in `[0, 5]` with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityScore {
    pub demand_intensity: f64,
    pub market_size: f64,
    pub competition: f64,
    pub overall: f64,
    pub level: PriorityLevel,
}

impl PriorityScore {
    pub fn landscape(&self) -> CompetitiveLandscape {
        CompetitiveLandscape::from_competition(self.competition)
    }
}

/// Caller-side violations of the scoring input contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ScoringError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
