use crate::scoring::{ClusterSignals, ExistingSolution, PriorityScorer, ScoringConfig};

pub(super) fn scorer() -> PriorityScorer {
    PriorityScorer::new(ScoringConfig::default())
}

pub(super) fn english_scorer() -> PriorityScorer {
    PriorityScorer::new(ScoringConfig {
        popular_keywords: ["travel", "health", "education", "finance"]
            .iter()
            .map(|kw| kw.to_string())
            .collect(),
        sentinel_markers: vec!["pending research".to_string(), "failed".to_string()],
    })
}

pub(super) fn keywords(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn competitor(name: &str) -> ExistingSolution {
    ExistingSolution::new(name, "no offline support")
}

pub(super) fn competitors(count: usize) -> Vec<ExistingSolution> {
    (0..count)
        .map(|idx| competitor(&format!("Competitor {idx}")))
        .collect()
}

pub(super) fn travel_signals() -> ClusterSignals {
    ClusterSignals {
        cluster_size: 30,
        total_data_size: 200,
        emotional_intensity: 4.0,
        keywords: keywords(&["旅行"]),
        existing_solutions: Vec::new(),
    }
}
