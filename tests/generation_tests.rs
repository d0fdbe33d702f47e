//! End-to-end row generation tests
//!
//! Runs the full pipeline many times per scenario with seeded generators and
//! checks the row invariants on every result.

use abacus::row::digits::digits_of;
use abacus::{generate_row, Constraints, Diagnostic, RowGenerator};

const RUNS: usize = 500;

fn free_slots(values: &[i64], trailing: usize) -> &[i64] {
    &values[..values.len() - trailing]
}

// =============================================================================
// Sum bounds
// =============================================================================

mod sum_bound_tests {
    use super::*;

    #[test]
    fn test_default_sheet_stays_in_bounds() {
        let mut generator = RowGenerator::seeded(1);
        let constraints = Constraints::default();
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert_eq!(row.values.len(), 4);
            assert!((0..=15).contains(&row.sum()), "{:?}", row);
            assert!(row.values[0] > 0, "{:?}", row);
            assert!(row.values.iter().all(|v| *v != 0));
            assert!(row.is_compliant());
        }
    }

    #[test]
    fn test_thread_rng_entry_point() {
        for _ in 0..50 {
            let row = generate_row(&Constraints::default()).unwrap();
            assert_eq!(row.values.len(), 4);
            assert!((0..=15).contains(&row.sum()));
        }
    }

    #[test]
    fn test_negative_answers_allowed() {
        let mut generator = RowGenerator::seeded(2);
        let constraints = Constraints {
            count: 5,
            max_magnitude: 7,
            max_sum: 10,
            answer_can_be_negative: true,
            ..Constraints::default()
        };
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert!((-10..=10).contains(&row.sum()), "{:?}", row);
            assert!(row.values[0] > 0);
            assert!(row.values.iter().all(|v| *v != 0));
        }
    }

    #[test]
    fn test_positive_only_rows() {
        let mut generator = RowGenerator::seeded(3);
        let constraints = Constraints {
            count: 5,
            max_magnitude: 7,
            max_sum: 25,
            allow_negative: false,
            ..Constraints::default()
        };
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert!(row.values.iter().all(|v| (1..=7).contains(v)), "{:?}", row);
            assert!(row.sum() <= 25);
        }
    }

    #[test]
    fn test_unit_magnitude_rows_cross_zero() {
        // every value is +-1, so both repairs must flip a sign to land in [0, 2]
        let mut generator = RowGenerator::seeded(1);
        let constraints = Constraints {
            count: 3,
            max_magnitude: 1,
            max_sum: 2,
            allow_negative: true,
            answer_can_be_negative: false,
            ..Constraints::default()
        };
        for _ in 0..2000 {
            let row = generator.generate(&constraints).unwrap();
            assert_eq!(row.values.len(), 3);
            assert!((0..=2).contains(&row.sum()), "{:?}", row);
            assert!(row.values[0] > 0, "{:?}", row);
            assert!(row.values.iter().all(|v| *v != 0));
            assert!(row.is_compliant(), "{:?}", row);
        }
    }

    #[test]
    fn test_narrow_window_over_seeds() {
        let constraints = Constraints {
            count: 4,
            max_magnitude: 2,
            max_sum: 3,
            allow_negative: true,
            answer_can_be_negative: false,
            ..Constraints::default()
        };
        for seed in 0..200 {
            let row = RowGenerator::seeded(seed).generate(&constraints).unwrap();
            assert!((0..=3).contains(&row.sum()), "seed {}: {:?}", seed, row);
            assert!(row.values[0] > 0, "seed {}: {:?}", seed, row);
            assert!(row.is_compliant(), "seed {}: {:?}", seed, row);
        }
    }

    #[test]
    fn test_extreme_max_sum_does_not_panic() {
        let mut generator = RowGenerator::seeded(12);
        for max_sum in [i64::MIN, i64::MAX] {
            let constraints = Constraints {
                max_sum,
                answer_can_be_negative: true,
                ..Constraints::default()
            };
            let row = generator.generate(&constraints).unwrap();
            assert_eq!(row.values.len(), 4);
            assert!(row.values[0] > 0);
        }
    }

    #[test]
    fn test_infeasible_sum_degrades_with_diagnostic() {
        let mut generator = RowGenerator::seeded(4);
        // five positive numbers can never sum to 3 or less
        let constraints = Constraints {
            count: 5,
            max_magnitude: 2,
            max_sum: 3,
            allow_negative: false,
            ..Constraints::default()
        };
        let row = generator.generate(&constraints).unwrap();
        assert_eq!(row.values.len(), 5);
        assert!(row.values.iter().all(|v| *v >= 1));
        assert!(row
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::SumNotReduced { .. })));
    }

    #[test]
    fn test_degenerate_constraints_still_produce_a_row() {
        let mut generator = RowGenerator::seeded(5);
        let constraints = Constraints {
            count: 0,
            max_magnitude: 0,
            max_sum: 0,
            allow_negative: false,
            ..Constraints::default()
        };
        let row = generator.generate(&constraints).unwrap();
        assert_eq!(row.values.len(), 1);
        assert!(row.values[0] > 0);
    }
}

// =============================================================================
// Trailing values and leading shape
// =============================================================================

mod shape_tests {
    use super::*;

    #[test]
    fn test_leading_and_trailing_combined() {
        let mut generator = RowGenerator::seeded(24);
        let constraints = Constraints {
            count: 3,
            max_magnitude: 6,
            max_sum: 24,
            leading_digit_count: 2,
            leading_digit_cap: 8,
            trailing_values: vec![4],
            allow_negative: true,
            answer_can_be_negative: false,
            ..Constraints::default()
        };
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert_eq!(row.values.len(), 4, "{:?}", row);
            assert_eq!(row.values[3], 4);

            let leader = row.values[0];
            assert!((10..=99).contains(&leader), "{:?}", row);
            assert!(digits_of(leader).iter().all(|d| *d <= 8));

            assert!((0..=24).contains(&row.sum()), "{:?}", row);
            assert!(row.values[1..3].iter().all(|v| *v != 0));
        }
    }

    #[test]
    fn test_trailing_values_kept_in_order() {
        let mut generator = RowGenerator::seeded(6);
        let constraints = Constraints {
            count: 3,
            max_magnitude: 9,
            max_sum: 30,
            trailing_values: vec![5, -2, 7],
            ..Constraints::default()
        };
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert_eq!(row.values.len(), 6);
            assert_eq!(&row.values[3..], &[5, -2, 7]);
            assert!(free_slots(&row.values, 3).iter().all(|v| *v != 0));
            assert!((0..=30).contains(&row.sum()), "{:?}", row);
        }
    }

    #[test]
    fn test_unreachable_leader_is_reported() {
        let mut generator = RowGenerator::seeded(7);
        let constraints = Constraints {
            count: 3,
            max_magnitude: 5,
            max_sum: 15,
            leading_digit_count: 3,
            ..Constraints::default()
        };
        let row = generator.generate(&constraints).unwrap();
        assert!(row.values[0] < 100);
        assert!(row
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::LeadingShapeSkipped { digit_count: 3, .. })));
    }
}

// =============================================================================
// Sum digit cap
// =============================================================================

mod digit_cap_tests {
    use super::*;

    #[test]
    fn test_answer_digits_capped() {
        let mut generator = RowGenerator::seeded(8);
        let constraints = Constraints {
            count: 4,
            max_magnitude: 30,
            max_sum: 99,
            sum_digit_cap: 4,
            ..Constraints::default()
        };
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert!((0..=44).contains(&row.sum()), "{:?}", row);
            let capped = digits_of(row.sum()).iter().all(|d| *d <= 4);
            let reported = row
                .diagnostics
                .iter()
                .any(|d| matches!(d, Diagnostic::DigitCapExceeded { .. }));
            assert!(capped || reported, "{:?}", row);
        }
    }

    #[test]
    fn test_cap_with_leader_and_trailing() {
        let mut generator = RowGenerator::seeded(9);
        let constraints = Constraints {
            count: 3,
            max_magnitude: 9,
            max_sum: 60,
            leading_digit_count: 2,
            leading_digit_cap: 3,
            trailing_values: vec![2],
            sum_digit_cap: 5,
            ..Constraints::default()
        };
        for _ in 0..RUNS {
            let row = generator.generate(&constraints).unwrap();
            assert_eq!(*row.values.last().unwrap(), 2);
            assert!(digits_of(row.values[0]).iter().all(|d| *d <= 3));
            assert!(row.sum() <= 55, "{:?}", row);
            let capped = digits_of(row.sum()).iter().all(|d| *d <= 5);
            assert!(capped || !row.is_compliant(), "{:?}", row);
        }
    }

    #[test]
    fn test_out_of_range_cap_is_unconstrained() {
        let constraints = Constraints {
            sum_digit_cap: 12,
            ..Constraints::default()
        };
        let a = RowGenerator::seeded(10).generate_many(&constraints, 20).unwrap();
        let b = RowGenerator::seeded(10)
            .generate_many(&Constraints::default(), 20)
            .unwrap();
        assert_eq!(a, b);
    }
}
