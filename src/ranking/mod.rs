//! Batch ranking of scored clusters for triage.

mod import;
mod report;
mod router;

pub use import::{import_csv, load_batch, ImportError};
pub use report::{DataQualitySummary, PriorityGroup, RankedCluster, RankingReport};
pub use router::ranking_router;

use crate::scoring::{ClusterSignals, ExistingSolution, PriorityScorer, ScoringError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One cluster as handed over by the enrichment stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterCandidate {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub size: u64,
    pub emotional_intensity: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub existing_solutions: Vec<ExistingSolution>,
}

impl ClusterCandidate {
    pub fn signals(&self, total_data_size: u64) -> ClusterSignals {
        ClusterSignals {
            cluster_size: self.size,
            total_data_size,
            emotional_intensity: self.emotional_intensity,
            keywords: self.keywords.clone(),
            existing_solutions: self.existing_solutions.clone(),
        }
    }
}

/// Clusters produced from a single collection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterBatch {
    /// Signals collected in the run; defaults to the sum of cluster sizes.
    #[serde(default)]
    pub total_data_size: Option<u64>,
    pub clusters: Vec<ClusterCandidate>,
}

impl ClusterBatch {
    /// Sum of all cluster sizes; fails instead of wrapping on overflow.
    pub fn clustered_size(&self) -> Result<u64, ScoringError> {
        self.clusters.iter().try_fold(0_u64, |sum, cluster| {
            sum.checked_add(cluster.size).ok_or_else(|| {
                ScoringError::invalid("size", "sum of cluster sizes overflows u64")
            })
        })
    }

    pub fn total_data_size(&self) -> Result<u64, ScoringError> {
        match self.total_data_size {
            Some(total) => Ok(total),
            None => self.clustered_size(),
        }
    }
}

/// Scores every cluster of the batch and orders them by composite score.
pub fn rank_batch(
    scorer: &PriorityScorer,
    batch: &ClusterBatch,
) -> Result<RankingReport, ScoringError> {
    let total_data_size = batch.total_data_size()?;

    let mut ranked = batch
        .clusters
        .iter()
        .map(|cluster| -> Result<RankedCluster, ScoringError> {
            let score = scorer.score_cluster(&cluster.signals(total_data_size))?;
            Ok(RankedCluster {
                rank: 0,
                id: cluster.id.clone(),
                label: cluster.label.clone(),
                size: cluster.size,
                landscape: score.landscape(),
                valid_competitors: scorer.valid_competitor_count(&cluster.existing_solutions),
                score,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| {
        b.score
            .overall
            .total_cmp(&a.score.overall)
            .then_with(|| a.id.cmp(&b.id))
    });
    for (idx, cluster) in ranked.iter_mut().enumerate() {
        cluster.rank = idx + 1;
    }

    let data_quality = DataQualitySummary::from_batch(batch)?;
    let report = RankingReport::new(data_quality, ranked);

    info!(
        clusters = report.ranked.len(),
        total_data_size,
        data_quality = report.data_quality.level.label(),
        "ranked cluster batch"
    );

    Ok(report)
}
