//! Deterministic priority scoring for a single cluster.
//!
//! Three sub-scores (demand intensity, market size, competition) are computed
//! independently from the cluster's signals and then combined into a weighted
//! composite and a discrete [`PriorityLevel`].

mod config;
mod domain;
mod policy;
mod quality;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ScoringConfig;
pub use domain::{
    ClusterSignals, CompetitiveLandscape, ExistingSolution, PriorityLevel, PriorityScore,
    ScoringError,
};
pub use policy::{COMPETITION_WEIGHT, DEMAND_WEIGHT, MARKET_WEIGHT};
pub use quality::{DataQualityLevel, PRELIMINARY_SAMPLE_SIZE, RELIABLE_SAMPLE_SIZE};
pub use rules::{round_one_decimal, CONSERVATIVE_MARKET_SIZE};

use tracing::debug;

/// Stateless scorer holding the reference tables it was built with.
#[derive(Debug, Clone, Default)]
pub struct PriorityScorer {
    config: ScoringConfig,
}

impl PriorityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Demand from the cluster's share of the batch, amplified by up to one
    /// point of emotional intensity.
    pub fn demand_intensity(
        &self,
        cluster_size: u64,
        total_data_size: u64,
        emotional_intensity: f64,
    ) -> Result<f64, ScoringError> {
        rules::demand_intensity(cluster_size, total_data_size, emotional_intensity)
    }

    /// Market size from topic popularity and sample volume. Batches under
    /// [`PRELIMINARY_SAMPLE_SIZE`] get [`CONSERVATIVE_MARKET_SIZE`].
    pub fn market_size(&self, keywords: &[String], cluster_size: u64, total_data_size: u64) -> f64 {
        rules::market_size(
            keywords,
            cluster_size,
            total_data_size,
            &self.config.popular_keywords,
        )
    }

    /// Inverse competition score; sentinel entries are ignored.
    pub fn competition(&self, existing_solutions: &[ExistingSolution]) -> f64 {
        rules::competition(existing_solutions, &self.config.sentinel_markers)
    }

    /// Number of entries that represent real competitors.
    pub fn valid_competitor_count(&self, existing_solutions: &[ExistingSolution]) -> usize {
        rules::valid_competitor_count(existing_solutions, &self.config.sentinel_markers)
    }

    /// Weighted composite of already-computed sub-scores. The level is read
    /// from the rounded `overall`, so a raw 3.46 reports 3.5 and is High.
    pub fn priority(
        &self,
        demand_intensity: f64,
        market_size: f64,
        competition: f64,
    ) -> Result<PriorityScore, ScoringError> {
        policy::combine(demand_intensity, market_size, competition)
    }

    pub fn score_cluster(&self, signals: &ClusterSignals) -> Result<PriorityScore, ScoringError> {
        let demand = self.demand_intensity(
            signals.cluster_size,
            signals.total_data_size,
            signals.emotional_intensity,
        )?;
        let market = self.market_size(
            &signals.keywords,
            signals.cluster_size,
            signals.total_data_size,
        );
        let competition = self.competition(&signals.existing_solutions);

        let score = self.priority(demand, market, competition)?;

        debug!(
            cluster_size = signals.cluster_size,
            total_data_size = signals.total_data_size,
            demand = score.demand_intensity,
            market = score.market_size,
            competition = score.competition,
            overall = score.overall,
            level = score.level.label(),
            "scored cluster"
        );

        Ok(score)
    }
}
