use super::common::*;
use crate::scoring::{PriorityLevel, ScoringError};

#[test]
fn weights_demand_over_market_and_competition() {
    let score = scorer().priority(2.3, 5.0, 5.0).expect("valid sub-scores");
    assert_eq!(score.overall, 3.9);
    assert_eq!(score.level, PriorityLevel::High);
    assert_eq!(score.demand_intensity, 2.3);
    assert_eq!(score.market_size, 5.0);
    assert_eq!(score.competition, 5.0);
}

#[test]
fn level_follows_rounded_overall() {
    let scorer = scorer();
    assert_eq!(scorer.priority(5.0, 2.5, 2.5).unwrap().overall, 3.5);
    assert_eq!(
        scorer.priority(5.0, 2.5, 2.5).unwrap().level,
        PriorityLevel::High
    );
    assert_eq!(
        scorer.priority(2.0, 3.0, 3.0).unwrap().level,
        PriorityLevel::Medium
    );
    assert_eq!(
        scorer.priority(1.2, 3.0, 2.0).unwrap().level,
        PriorityLevel::Low
    );
}

#[test]
fn level_thresholds_are_inclusive() {
    assert_eq!(PriorityLevel::from_overall(3.5), PriorityLevel::High);
    assert_eq!(PriorityLevel::from_overall(3.49), PriorityLevel::Medium);
    assert_eq!(PriorityLevel::from_overall(2.5), PriorityLevel::Medium);
    assert_eq!(PriorityLevel::from_overall(2.49), PriorityLevel::Low);
    assert_eq!(PriorityLevel::from_overall(5.0), PriorityLevel::High);
    assert_eq!(PriorityLevel::from_overall(0.0), PriorityLevel::Low);
}

#[test]
fn overall_stays_within_bounds() {
    let scorer = scorer();
    let steps = [0.0, 0.7, 1.3, 2.5, 3.1, 4.4, 5.0];
    for demand in steps {
        for market in steps {
            for competition in steps {
                let score = scorer.priority(demand, market, competition).unwrap();
                assert!((0.0..=5.0).contains(&score.overall));
                let scaled = score.overall * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-9);
                let expected = ((demand * 0.4 + market * 0.3 + competition * 0.3) * 10.0)
                    .round()
                    / 10.0;
                assert_eq!(score.overall, expected);
            }
        }
    }
}

#[test]
fn rejects_out_of_range_sub_scores() {
    let scorer = scorer();
    let cases = [
        ((5.5, 3.0, 3.0), "demand_intensity"),
        ((3.0, f64::NAN, 3.0), "market_size"),
        ((3.0, 3.0, -1.0), "competition"),
    ];
    for ((demand, market, competition), expected_field) in cases {
        match scorer.priority(demand, market, competition) {
            Err(ScoringError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected {expected_field} rejection, got {other:?}"),
        }
    }
}

#[test]
fn level_labels_match_wire_names() {
    assert_eq!(PriorityLevel::High.label(), "High");
    assert_eq!(PriorityLevel::Medium.label(), "Medium");
    assert_eq!(PriorityLevel::Low.label(), "Low");
    assert_eq!(
        serde_json::to_value(PriorityLevel::Medium).unwrap(),
        serde_json::json!("Medium")
    );
}

#[test]
fn level_is_read_from_rounded_overall() {
    // 4.0 * 0.4 + 3.2 * 0.3 + 3.0 * 0.3 = 3.46 before rounding
    let score = scorer().priority(4.0, 3.2, 3.0).unwrap();
    assert_eq!(score.overall, 3.5);
    assert_eq!(score.level, PriorityLevel::High);
}
