use super::domain::{ExistingSolution, ScoringError};
use super::quality::{DataQualityLevel, RELIABLE_SAMPLE_SIZE};

pub(crate) const MAX_SCORE: f64 = 5.0;

/// Market size reported when the batch is too small to read anything into.
pub const CONSERVATIVE_MARKET_SIZE: f64 = 2.5;

const POPULAR_BASE: f64 = 4.0;
const NICHE_BASE: f64 = 3.0;
const MODERATE_SAMPLE_SIZE: u64 = 100;
const RELIABLE_DATA_BOOST: f64 = 0.5;
const MODERATE_DATA_BOOST: f64 = 0.3;
const CLUSTER_SIZE_DIVISOR: f64 = 30.0;
const MAX_SIZE_BOOST: f64 = 0.5;
const MAX_EMOTION_BOOST: f64 = 1.0;

/// Rounds to the nearest tenth, ties away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn ensure_rating(field: &'static str, value: f64) -> Result<f64, ScoringError> {
    if !value.is_finite() {
        return Err(ScoringError::invalid(field, format!("{value} is not a finite number")));
    }
    if !(0.0..=MAX_SCORE).contains(&value) {
        return Err(ScoringError::invalid(
            field,
            format!("{value} is outside [0, {MAX_SCORE}]"),
        ));
    }
    Ok(value)
}

fn ensure_counts(cluster_size: u64, total_data_size: u64) -> Result<(), ScoringError> {
    if total_data_size == 0 {
        return Err(ScoringError::invalid(
            "total_data_size",
            "must be greater than zero",
        ));
    }
    if cluster_size > total_data_size {
        return Err(ScoringError::invalid(
            "cluster_size",
            format!("{cluster_size} exceeds total_data_size {total_data_size}"),
        ));
    }
    Ok(())
}

pub(crate) fn demand_intensity(
    cluster_size: u64,
    total_data_size: u64,
    emotional_intensity: f64,
) -> Result<f64, ScoringError> {
    ensure_counts(cluster_size, total_data_size)?;
    let emotional_intensity = ensure_rating("emotional_intensity", emotional_intensity)?;

    // Every 10% share of the batch is worth one point.
    let size_ratio = cluster_size as f64 / total_data_size as f64;
    let size_score = (size_ratio * 10.0).min(MAX_SCORE);
    let emotion_boost = emotional_intensity / MAX_SCORE * MAX_EMOTION_BOOST;

    Ok(round_one_decimal((size_score + emotion_boost).min(MAX_SCORE)))
}

pub(crate) fn market_size(
    keywords: &[String],
    cluster_size: u64,
    total_data_size: u64,
    popular_keywords: &[String],
) -> f64 {
    if DataQualityLevel::from_total_size(total_data_size) == DataQualityLevel::Exploratory {
        return CONSERVATIVE_MARKET_SIZE;
    }

    let base_score = if is_popular_topic(keywords, popular_keywords) {
        POPULAR_BASE
    } else {
        NICHE_BASE
    };

    let data_boost = if total_data_size >= RELIABLE_SAMPLE_SIZE {
        RELIABLE_DATA_BOOST
    } else if total_data_size >= MODERATE_SAMPLE_SIZE {
        MODERATE_DATA_BOOST
    } else {
        0.0
    };

    let size_boost = (cluster_size as f64 / CLUSTER_SIZE_DIVISOR).min(MAX_SIZE_BOOST);

    round_one_decimal((base_score + data_boost + size_boost).min(MAX_SCORE))
}

/// Substring match in both directions on the raw keyword, case-sensitive.
pub(crate) fn is_popular_topic(keywords: &[String], popular_keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| {
        popular_keywords.iter().any(|popular| {
            keyword.contains(popular.as_str()) || popular.contains(keyword.as_str())
        })
    })
}

pub(crate) fn is_sentinel(solution: &ExistingSolution, sentinel_markers: &[String]) -> bool {
    sentinel_markers
        .iter()
        .any(|marker| solution.name.contains(marker.as_str()))
}

pub(crate) fn valid_competitor_count(
    solutions: &[ExistingSolution],
    sentinel_markers: &[String],
) -> usize {
    solutions
        .iter()
        .filter(|solution| !is_sentinel(solution, sentinel_markers))
        .count()
}

pub(crate) fn competition(solutions: &[ExistingSolution], sentinel_markers: &[String]) -> f64 {
    // Floors at 1.0; saturated markets never reach zero.
    match valid_competitor_count(solutions, sentinel_markers) {
        0 => 5.0,
        1 => 4.0,
        2 => 3.0,
        3 => 2.0,
        _ => 1.0,
    }
}
