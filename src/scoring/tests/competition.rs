use super::common::*;
use crate::scoring::ExistingSolution;

#[test]
fn step_function_over_valid_competitors() {
    let scorer = scorer();
    let expected = [(0, 5.0), (1, 4.0), (2, 3.0), (3, 2.0), (4, 1.0), (9, 1.0)];
    for (count, score) in expected {
        assert_eq!(scorer.competition(&competitors(count)), score, "{count}");
    }
}

#[test]
fn score_never_increases_with_more_competitors() {
    let scorer = scorer();
    let scores: Vec<f64> = (0..8).map(|n| scorer.competition(&competitors(n))).collect();
    assert!(scores.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn sentinel_only_lists_read_as_blue_ocean() {
    let scorer = scorer();
    let solutions = vec![
        competitor("待调研"),
        competitor("竞品解析失败"),
        competitor("API调用失败 (timeout)"),
    ];
    assert_eq!(scorer.valid_competitor_count(&solutions), 0);
    assert_eq!(scorer.competition(&solutions), 5.0);
}

#[test]
fn sentinels_are_discounted_from_mixed_lists() {
    let scorer = scorer();
    let solutions = vec![
        competitor("小红书"),
        competitor("待调研"),
        competitor("马蜂窝"),
        competitor("解析失败"),
    ];
    assert_eq!(scorer.valid_competitor_count(&solutions), 2);
    assert_eq!(scorer.competition(&solutions), 3.0);
}

#[test]
fn sentinel_markers_only_apply_to_names() {
    let scorer = scorer();
    let solutions = vec![ExistingSolution::new("马蜂窝", "待调研")];
    assert_eq!(scorer.competition(&solutions), 4.0);
}

#[test]
fn injected_sentinels_replace_defaults() {
    let scorer = english_scorer();
    let solutions = vec![
        competitor("pending research"),
        competitor("analysis failed"),
        competitor("待调研"),
    ];
    assert_eq!(scorer.valid_competitor_count(&solutions), 1);
    assert_eq!(scorer.competition(&solutions), 4.0);
}
