use super::common::*;
use crate::scoring::CONSERVATIVE_MARKET_SIZE;

#[test]
fn small_batches_get_conservative_estimate() {
    let scorer = scorer();
    let popular = keywords(&["旅行", "美食"]);
    let niche = keywords(&["发票报销"]);

    for total in [0, 1, 20, 49] {
        for cluster in [0, total / 2, total] {
            assert_eq!(
                scorer.market_size(&popular, cluster, total),
                CONSERVATIVE_MARKET_SIZE
            );
            assert_eq!(scorer.market_size(&niche, cluster, total), 2.5);
        }
    }
}

#[test]
fn guard_ends_at_fifty_signals() {
    let scorer = scorer();
    let niche = keywords(&["发票报销"]);
    assert_eq!(scorer.market_size(&niche, 0, 49), 2.5);
    assert_eq!(scorer.market_size(&niche, 0, 50), 3.0);
}

#[test]
fn popular_topic_with_large_batch_reaches_cap() {
    let scorer = scorer();
    // 4.0 base + 0.5 data boost + size boost capped at 0.5
    assert_eq!(scorer.market_size(&keywords(&["旅行"]), 30, 200), 5.0);
    assert_eq!(scorer.market_size(&keywords(&["旅行"]), 150, 200), 5.0);
}

#[test]
fn data_boost_steps_at_one_and_two_hundred() {
    let scorer = scorer();
    let niche = keywords(&["发票报销"]);
    assert_eq!(scorer.market_size(&niche, 0, 99), 3.0);
    assert_eq!(scorer.market_size(&niche, 0, 100), 3.3);
    assert_eq!(scorer.market_size(&niche, 0, 199), 3.3);
    assert_eq!(scorer.market_size(&niche, 0, 200), 3.5);
}

#[test]
fn size_boost_scales_with_cluster() {
    let scorer = scorer();
    let niche = keywords(&["发票报销"]);
    assert_eq!(scorer.market_size(&niche, 3, 60), 3.1);
    assert_eq!(scorer.market_size(&niche, 6, 120), 3.5);
    assert_eq!(scorer.market_size(&niche, 60, 120), 3.8);
}

#[test]
fn popularity_matches_substrings_in_both_directions() {
    let scorer = scorer();
    assert_eq!(scorer.market_size(&keywords(&["出国旅行攻略"]), 0, 60), 4.0);
    assert_eq!(scorer.market_size(&keywords(&["旅"]), 0, 60), 4.0);
    assert_eq!(
        scorer.market_size(&keywords(&["发票", "职场新人"]), 0, 60),
        4.0
    );
}

#[test]
fn popularity_is_case_sensitive() {
    let scorer = english_scorer();
    assert_eq!(scorer.market_size(&keywords(&["travel hacks"]), 0, 60), 4.0);
    assert_eq!(scorer.market_size(&keywords(&["Travel"]), 0, 60), 3.0);
}

#[test]
fn keywords_are_matched_without_trimming() {
    let scorer = scorer();
    // An empty keyword is contained by every reference keyword.
    assert_eq!(scorer.market_size(&keywords(&[""]), 0, 60), 4.0);
    assert_eq!(scorer.market_size(&keywords(&[" 旅"]), 0, 60), 3.0);
    assert_eq!(scorer.market_size(&[], 0, 60), 3.0);
}
