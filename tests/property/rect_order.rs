//! The rectangle ordering must be a strict total order and the result set
//! must behave as a set under that identity.

use std::cmp::Ordering;

use proptest::prelude::*;

use slimescan_rs::{Rectangle, ResultSet};

fn arb_rect() -> impl Strategy<Value = Rectangle> {
    // Extents stay small so area/distance arithmetic cannot overflow.
    (-10_000i64..10_000, -10_000i64..10_000, 1i64..64, 1i64..64)
        .prop_map(|(x, z, w, h)| Rectangle::new(x, z, w, h))
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric(a in arb_rect(), b in arb_rect()) {
        match a.cmp(&b) {
            Ordering::Less => prop_assert_eq!(b.cmp(&a), Ordering::Greater),
            Ordering::Greater => prop_assert_eq!(b.cmp(&a), Ordering::Less),
            Ordering::Equal => {
                prop_assert_eq!(b.cmp(&a), Ordering::Equal);
                // Equality is exactly the 4-tuple identity.
                prop_assert_eq!((a.x, a.z, a.width, a.height), (b.x, b.z, b.width, b.height));
            }
        }
    }

    #[test]
    fn ordering_is_transitive(a in arb_rect(), b in arb_rect(), c in arb_rect()) {
        let mut v = [a, b, c];
        v.sort();
        prop_assert!(v[0] <= v[1] && v[1] <= v[2] && v[0] <= v[2]);
    }

    #[test]
    fn double_insert_leaves_the_set_unchanged(rects in prop::collection::vec(arb_rect(), 1..32)) {
        let set = ResultSet::new();
        for r in &rects {
            set.insert(*r);
        }
        let len_once = set.len();
        let snap_once = set.snapshot();

        for r in &rects {
            set.insert(*r);
        }
        prop_assert_eq!(set.len(), len_once);
        prop_assert_eq!(set.snapshot(), snap_once);
    }

    #[test]
    fn snapshot_is_sorted_and_deduplicated(rects in prop::collection::vec(arb_rect(), 0..64)) {
        let set = ResultSet::new();
        for r in &rects {
            set.insert(*r);
        }
        let snap = set.snapshot();
        for pair in snap.windows(2) {
            prop_assert!(pair[0] < pair[1], "snapshot must be strictly increasing");
        }
    }
}
