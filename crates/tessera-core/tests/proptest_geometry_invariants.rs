//! Property tests for the geometry primitives layouts rely on.

use proptest::prelude::*;
use tessera_core::geometry::{Rect, Sides};

fn rect() -> impl Strategy<Value = Rect> {
    (0u16..200, 0u16..200, 0u16..200, 0u16..200).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn inner_stays_within_outer(r in rect(), t in 0u16..50, rt in 0u16..50, b in 0u16..50, l in 0u16..50) {
        let inner = r.inner(Sides::new(t, rt, b, l));
        prop_assert!(inner.width <= r.width);
        prop_assert!(inner.height <= r.height);
        if !inner.is_empty() {
            prop_assert!(inner.x >= r.x && inner.right() <= r.right());
            prop_assert!(inner.y >= r.y && inner.bottom() <= r.bottom());
        }
    }

    #[test]
    fn intersection_is_contained_in_both(a in rect(), b in rect()) {
        if let Some(i) = a.intersection(&b) {
            prop_assert!(!i.is_empty());
            prop_assert!(a.contains(i.x, i.y) && b.contains(i.x, i.y));
            prop_assert!(i.right() <= a.right() && i.right() <= b.right());
            prop_assert!(i.bottom() <= a.bottom() && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn centered_fits_parent(r in rect(), w in 0u16..300, h in 0u16..300) {
        let c = r.centered(w, h);
        prop_assert!(c.x >= r.x && c.right() <= r.right());
        prop_assert!(c.y >= r.y && c.bottom() <= r.bottom());
        prop_assert_eq!(c.width, w.min(r.width));
    }
}
