//! Property tests for MEREC weighting and AROMAN ranking.

use proptest::prelude::*;

use merec_aroman::domain::analysis::{AromanAnalyzer, DecisionMatrix, MerecCalculator, Normalizer};
use merec_aroman::domain::foundation::CriterionType;

/// Positive matrices with 1..6 alternatives and 2..5 criteria, plus criterion types.
fn problem_strategy() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<CriterionType>)> {
    (1usize..6, 2usize..5).prop_flat_map(|(m, n)| {
        (
            prop::collection::vec(prop::collection::vec(0.1f64..1000.0, n), m),
            prop::collection::vec(
                prop_oneof![Just(CriterionType::Beneficial), Just(CriterionType::Cost)],
                n,
            ),
        )
    })
}

proptest! {
    #[test]
    fn weights_are_non_negative_and_sum_to_one((rows, types) in problem_strategy()) {
        let matrix = DecisionMatrix::new(rows).unwrap();
        let weights = MerecCalculator::compute_weights(&matrix, &types).unwrap();

        prop_assert_eq!(weights.len(), types.len());
        prop_assert!(weights.values().iter().all(|w| w.is_finite() && *w >= 0.0));
        prop_assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_a_permutation_sorted_by_score((rows, types) in problem_strategy()) {
        let m = rows.len();
        let matrix = DecisionMatrix::new(rows).unwrap();
        let weights = MerecCalculator::compute_weights(&matrix, &types).unwrap();
        let results = AromanAnalyzer::rank(&matrix, &weights, &types).unwrap();

        let mut indices: Vec<_> = results.iter().map(|r| r.alternative_index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..m).collect::<Vec<_>>());
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(results.iter().all(|r| r.score > 0.0 && r.score.is_finite()));
    }

    #[test]
    fn evaluation_is_idempotent((rows, types) in problem_strategy()) {
        let matrix = DecisionMatrix::new(rows).unwrap();

        let w1 = MerecCalculator::compute_weights(&matrix, &types).unwrap();
        let w2 = MerecCalculator::compute_weights(&matrix, &types).unwrap();
        prop_assert_eq!(&w1, &w2);

        let r1 = AromanAnalyzer::rank(&matrix, &w1, &types).unwrap();
        let r2 = AromanAnalyzer::rank(&matrix, &w2, &types).unwrap();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn beneficial_only_problems_have_no_cost_sum((rows, types) in problem_strategy()) {
        let types = vec![CriterionType::Beneficial; types.len()];
        let matrix = DecisionMatrix::new(rows).unwrap();
        let weights = MerecCalculator::compute_weights(&matrix, &types).unwrap();
        let results = AromanAnalyzer::rank(&matrix, &weights, &types).unwrap();

        prop_assert!(results.iter().all(|r| r.cost_sum == 0.0 && r.score >= 1.0));
    }

    #[test]
    fn normalized_values_stay_in_unit_interval((rows, types) in problem_strategy()) {
        let matrix = DecisionMatrix::new(rows).unwrap();

        for row in Normalizer::min_max(&matrix, Some(types.as_slice())) {
            prop_assert!(row.iter().all(|v| (0.0..=1.0).contains(v)));
        }
        for row in Normalizer::vector(&matrix) {
            prop_assert!(row.iter().all(|v| *v > 0.0 && *v <= 1.0 + 1e-12));
        }
    }
}
