#![forbid(unsafe_code)]

//! Size constraints and the sibling distribution solver.
//!
//! [`calculate_constraints`] sizes a group of siblings along one axis in
//! three passes:
//!
//! 1. `Length` and `Percentage` items are sized against the full total and
//!    subtracted from what remains.
//! 2. `Ratio` items share the remainder (clamped at zero) in proportion to
//!    their weights, truncating each share.
//! 3. If the sizes add up to more than the total, every size is scaled by
//!    `total / sum`, truncating.
//!
//! Leftover space after pass 2 is left unused; give the last item a ratio to
//! absorb it. Per-item `min`/`max` clamps apply inside
//! [`ConstraintSet::calculate`], before the group passes see the size.

use tessera_core::{debug, debug_span};

/// How one dimension of one child is sized relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// An exact number of cells.
    Length(u16),
    /// A fraction of the parent, `0.0..=1.0`.
    Percentage(f64),
    /// A weight among ratio siblings.
    Ratio(f64),
}

impl Constraint {
    #[must_use]
    pub const fn length(cells: u16) -> Self {
        Self::Length(cells)
    }

    /// A fraction of the parent. Clamped to `0.0..=1.0`; NaN becomes 0.
    #[must_use]
    pub fn percentage(fraction: f64) -> Self {
        Self::Percentage(sanitize(fraction).min(1.0))
    }

    /// A sibling weight. Negative and NaN weights become 0.
    #[must_use]
    pub fn ratio(weight: f64) -> Self {
        Self::Ratio(sanitize(weight))
    }

    #[inline]
    #[must_use]
    pub const fn is_ratio(&self) -> bool {
        matches!(self, Self::Ratio(_))
    }

    /// The weight of a ratio constraint, 0 for anything else.
    #[must_use]
    pub fn ratio_weight(&self) -> f64 {
        match *self {
            Self::Ratio(w) => sanitize(w),
            _ => 0.0,
        }
    }

    /// Size before min/max clamping.
    fn resolve(&self, total: u16, ratio_total: f64) -> u16 {
        match *self {
            Self::Length(cells) => cells,
            Self::Percentage(p) => to_cells((f64::from(total) * sanitize(p).min(1.0)).round()),
            Self::Ratio(w) => {
                if ratio_total <= 0.0 || !ratio_total.is_finite() {
                    return 0;
                }
                to_cells((f64::from(total) * sanitize(w) / ratio_total + 1e-9).floor())
            }
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

fn to_cells(value: f64) -> u16 {
    if value <= 0.0 {
        0
    } else if value >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        value as u16
    }
}

/// A base [`Constraint`] with optional min and max clamps.
///
/// The min is applied first and the max second, so a max below the min wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintSet {
    pub constraint: Constraint,
    pub min: Option<u16>,
    pub max: Option<u16>,
}

impl ConstraintSet {
    #[must_use]
    pub const fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn length(cells: u16) -> Self {
        Self::new(Constraint::Length(cells))
    }

    #[must_use]
    pub fn percentage(fraction: f64) -> Self {
        Self::new(Constraint::percentage(fraction))
    }

    #[must_use]
    pub fn ratio(weight: f64) -> Self {
        Self::new(Constraint::ratio(weight))
    }

    /// Takes the whole parent: `Percentage(1.0)`.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(Constraint::Percentage(1.0))
    }

    #[must_use]
    pub const fn min(mut self, min: u16) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub const fn max(mut self, max: u16) -> Self {
        self.max = Some(max);
        self
    }

    /// Size of this item alone: the base constraint against `total` (ratios
    /// against `ratio_total`), then min, then max.
    #[must_use]
    pub fn calculate(&self, total: u16, ratio_total: f64) -> u16 {
        let mut size = self.constraint.resolve(total, ratio_total);
        if let Some(min) = self.min {
            size = size.max(min);
        }
        if let Some(max) = self.max {
            size = size.min(max);
        }
        size
    }
}

impl From<Constraint> for ConstraintSet {
    fn from(constraint: Constraint) -> Self {
        Self::new(constraint)
    }
}

/// Distribute `total` cells among `sets`. See the module docs for the
/// passes. The result has one size per set and never sums past `total`.
#[must_use]
pub fn calculate_constraints(sets: &[ConstraintSet], total: u16) -> Vec<u16> {
    let span = debug_span!("layout.distribute", total, count = sets.len());
    let _guard = span.enter();

    let mut sizes = vec![0u16; sets.len()];
    let mut remaining = i64::from(total);
    let mut ratio_total = 0.0;

    for (size, set) in sizes.iter_mut().zip(sets) {
        if set.constraint.is_ratio() {
            ratio_total += set.constraint.ratio_weight();
        } else {
            *size = set.calculate(total, 0.0);
            remaining -= i64::from(*size);
        }
    }

    let remaining = remaining.max(0) as u16;
    if ratio_total > 0.0 && remaining > 0 {
        for (size, set) in sizes.iter_mut().zip(sets) {
            if set.constraint.is_ratio() {
                *size = set.calculate(remaining, ratio_total);
            }
        }
    }

    let sum: u64 = sizes.iter().map(|&s| u64::from(s)).sum();
    if sum > u64::from(total) {
        debug!(sum, total, "constraints overflow; scaling down");
        for size in &mut sizes {
            *size = (u64::from(*size) * u64::from(total) / sum) as u16;
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(items: &[Constraint]) -> Vec<ConstraintSet> {
        items.iter().copied().map(ConstraintSet::from).collect()
    }

    #[test]
    fn fixed_percentage_ratio_mix() {
        let sizes = calculate_constraints(
            &sets(&[
                Constraint::length(20),
                Constraint::percentage(0.3),
                Constraint::ratio(1.0),
            ]),
            100,
        );
        assert_eq!(sizes, vec![20, 30, 50]);
    }

    #[test]
    fn two_ratios() {
        let sizes = calculate_constraints(&sets(&[Constraint::ratio(1.0), Constraint::ratio(2.0)]), 90);
        assert_eq!(sizes, vec![30, 60]);
    }

    #[test]
    fn ratio_shares_truncate() {
        let sizes = calculate_constraints(
            &sets(&[Constraint::ratio(1.0), Constraint::ratio(1.0), Constraint::ratio(1.0)]),
            10,
        );
        assert_eq!(sizes, vec![3, 3, 3]);
    }

    #[test]
    fn overflow_scales_down() {
        let sizes = calculate_constraints(&sets(&[Constraint::length(60), Constraint::length(60)]), 100);
        assert_eq!(sizes, vec![50, 50]);
        assert!(sizes.iter().sum::<u16>() <= 100);
    }

    #[test]
    fn ratios_starve_after_fixed_overflow() {
        let sizes = calculate_constraints(
            &sets(&[Constraint::length(80), Constraint::length(40), Constraint::ratio(1.0)]),
            100,
        );
        assert_eq!(sizes[2], 0);
        assert!(sizes.iter().sum::<u16>() <= 100);
    }

    #[test]
    fn undershoot_is_left_unused() {
        let sizes = calculate_constraints(&sets(&[Constraint::length(10), Constraint::percentage(0.2)]), 100);
        assert_eq!(sizes, vec![10, 20]);
    }

    #[test]
    fn max_wins_over_min() {
        let set = ConstraintSet::length(50).min(10).max(5);
        assert_eq!(set.calculate(100, 0.0), 5);
        let set = ConstraintSet::ratio(1.0).min(10).max(5);
        assert_eq!(set.calculate(100, 1.0), 5);
    }

    #[test]
    fn min_raises_small_results() {
        assert_eq!(ConstraintSet::percentage(0.01).min(4).calculate(100, 0.0), 4);
    }

    #[test]
    fn lone_ratio_without_total_is_zero() {
        assert_eq!(ConstraintSet::ratio(1.0).calculate(100, 0.0), 0);
        assert_eq!(calculate_constraints(&sets(&[Constraint::ratio(0.0)]), 100), vec![0]);
    }

    #[test]
    fn construction_clamps() {
        assert_eq!(Constraint::percentage(1.5), Constraint::Percentage(1.0));
        assert_eq!(Constraint::percentage(-0.5), Constraint::Percentage(0.0));
        assert_eq!(Constraint::percentage(f64::NAN), Constraint::Percentage(0.0));
        assert_eq!(Constraint::ratio(-2.0), Constraint::Ratio(0.0));
    }

    #[test]
    fn raw_variants_are_clamped_when_resolved() {
        assert_eq!(ConstraintSet::new(Constraint::Percentage(-1.0)).calculate(50, 0.0), 0);
        assert_eq!(ConstraintSet::new(Constraint::Percentage(3.0)).calculate(50, 0.0), 50);
        let sizes = calculate_constraints(
            &sets(&[Constraint::Ratio(-1.0), Constraint::ratio(1.0)]),
            40,
        );
        assert_eq!(sizes, vec![0, 40]);
    }

    #[test]
    fn empty_and_zero_total() {
        assert!(calculate_constraints(&[], 10).is_empty());
        let sizes = calculate_constraints(&sets(&[Constraint::length(5), Constraint::ratio(1.0)]), 0);
        assert_eq!(sizes, vec![0, 0]);
    }
}
