//! Property tests for the distribution solver.

use proptest::prelude::*;
use tessera_layout::{Constraint, ConstraintSet, calculate_constraints};

fn constraint() -> impl Strategy<Value = Constraint> {
    prop_oneof![
        (0u16..300).prop_map(Constraint::length),
        (-0.5f64..1.5).prop_map(Constraint::percentage),
        (0.0f64..8.0).prop_map(Constraint::ratio),
    ]
}

fn constraint_set() -> impl Strategy<Value = ConstraintSet> {
    (constraint(), proptest::option::of(0u16..200), proptest::option::of(0u16..200)).prop_map(
        |(c, min, max)| ConstraintSet {
            constraint: c,
            min,
            max,
        },
    )
}

proptest! {
    #[test]
    fn sizes_never_exceed_total(
        sets in proptest::collection::vec(constraint_set(), 0..12),
        total in 0u16..500,
    ) {
        let sizes = calculate_constraints(&sets, total);
        prop_assert_eq!(sizes.len(), sets.len());
        let sum: u32 = sizes.iter().map(|&s| u32::from(s)).sum();
        prop_assert!(sum <= u32::from(total), "sum {} > total {}", sum, total);
    }

    #[test]
    fn max_bounds_single_size(set in constraint_set(), total in 0u16..500) {
        let size = set.calculate(total, 4.0);
        if let Some(max) = set.max {
            prop_assert!(size <= max);
        }
        if let (Some(min), None) = (set.min, set.max) {
            prop_assert!(size >= min);
        }
    }

    #[test]
    fn fixed_lengths_fit_unchanged(lengths in proptest::collection::vec(0u16..20, 1..10)) {
        let total: u16 = lengths.iter().sum();
        let sets: Vec<ConstraintSet> = lengths.iter().map(|&l| ConstraintSet::length(l)).collect();
        prop_assert_eq!(calculate_constraints(&sets, total + 5), lengths);
    }

    #[test]
    fn percentages_stay_within_range(fraction in -10.0f64..10.0) {
        let Constraint::Percentage(p) = Constraint::percentage(fraction) else {
            unreachable!()
        };
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
