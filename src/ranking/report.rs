use super::ClusterBatch;
use crate::scoring::{
    round_one_decimal, CompetitiveLandscape, DataQualityLevel, PriorityLevel, PriorityScore,
    ScoringError,
};
use serde::Serialize;

/// How far the batch can be trusted, derived from its volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQualitySummary {
    pub level: DataQualityLevel,
    pub level_label: &'static str,
    pub total_data_size: u64,
    pub cluster_count: usize,
    pub average_cluster_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl DataQualitySummary {
    pub fn from_batch(batch: &ClusterBatch) -> Result<Self, ScoringError> {
        let total_data_size = batch.total_data_size()?;
        let level = DataQualityLevel::from_total_size(total_data_size);
        let cluster_count = batch.clusters.len();
        let clustered = batch.clustered_size()?;
        let average_cluster_size = if cluster_count == 0 {
            0.0
        } else {
            round_one_decimal(clustered as f64 / cluster_count as f64)
        };

        Ok(Self {
            level,
            level_label: level.label(),
            total_data_size,
            cluster_count,
            average_cluster_size,
            advisory: level.advisory(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCluster {
    pub rank: usize,
    pub id: String,
    pub label: String,
    pub size: u64,
    pub score: PriorityScore,
    pub landscape: CompetitiveLandscape,
    pub valid_competitors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityGroup {
    pub level: PriorityLevel,
    pub level_label: &'static str,
    pub cluster_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub data_quality: DataQualitySummary,
    pub ranked: Vec<RankedCluster>,
    pub groups: Vec<PriorityGroup>,
}

impl RankingReport {
    /// Builds level groups from clusters already in rank order.
    pub(crate) fn new(data_quality: DataQualitySummary, ranked: Vec<RankedCluster>) -> Self {
        let groups = PriorityLevel::ordered()
            .into_iter()
            .map(|level| PriorityGroup {
                level,
                level_label: level.label(),
                cluster_ids: ranked
                    .iter()
                    .filter(|cluster| cluster.score.level == level)
                    .map(|cluster| cluster.id.clone())
                    .collect(),
            })
            .collect();

        Self {
            data_quality,
            ranked,
            groups,
        }
    }

    pub fn clusters_at(&self, level: PriorityLevel) -> impl Iterator<Item = &RankedCluster> {
        self.ranked
            .iter()
            .filter(move |cluster| cluster.score.level == level)
    }
}
