use super::domain::{PriorityLevel, PriorityScore, ScoringError};
use super::rules::{ensure_rating, round_one_decimal, MAX_SCORE};

pub const DEMAND_WEIGHT: f64 = 0.4;
pub const MARKET_WEIGHT: f64 = 0.3;
pub const COMPETITION_WEIGHT: f64 = 0.3;

pub(crate) fn combine(
    demand_intensity: f64,
    market_size: f64,
    competition: f64,
) -> Result<PriorityScore, ScoringError> {
    let demand_intensity = ensure_rating("demand_intensity", demand_intensity)?;
    let market_size = ensure_rating("market_size", market_size)?;
    let competition = ensure_rating("competition", competition)?;

    let weighted = demand_intensity * DEMAND_WEIGHT
        + market_size * MARKET_WEIGHT
        + competition * COMPETITION_WEIGHT;
    let overall = round_one_decimal(weighted).clamp(0.0, MAX_SCORE);

    Ok(PriorityScore {
        demand_intensity,
        market_size,
        competition,
        overall,
        level: PriorityLevel::from_overall(overall),
    })
}
