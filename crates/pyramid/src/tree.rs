use crate::arena::{Arena, Id};
use crate::observer::SortObserver;

/// Build state for one sort call: the arena, the current root and the
/// injected observer.
///
/// The structure is a 2-3 shaped tree of containers. All bottom containers
/// sit at the same depth; inserts land at the bottom and full containers
/// hand their median one level up, so the tree only grows at the root.
pub(crate) struct Tree<'a, O: SortObserver> {
    arena: &'a mut Arena,
    observer: &'a mut O,
    root: Id,
}

impl<'a, O: SortObserver> Tree<'a, O> {
    /// Seeds the structure from the first three values: the median becomes
    /// the root, the minimum its `below` child, the maximum its `kids[0]`
    /// child.
    pub(crate) fn seed(arena: &'a mut Arena, observer: &'a mut O, first: [i64; 3]) -> Self {
        let [a, b, c] = first;
        let (lo, mid, hi) = sort3(a, b, c);

        let root = arena.alloc();
        let below = arena.alloc();
        let kid = arena.alloc();
        {
            let r = arena.get_mut(root);
            r.vals[0] = mid;
            r.len = 1;
            r.below = below;
            r.kids[0] = kid;
        }
        {
            let b = arena.get_mut(below);
            b.vals[0] = lo;
            b.len = 1;
            b.parent = root;
        }
        {
            let k = arena.get_mut(kid);
            k.vals[0] = hi;
            k.len = 1;
            k.parent = root;
        }

        Self {
            arena,
            observer,
            root,
        }
    }

    pub(crate) fn root(&self) -> Id {
        self.root
    }

    pub(crate) fn insert(&mut self, value: i64) {
        let bottom = self.locate(value);
        self.insert_at_bottom(bottom, value);
        #[cfg(debug_assertions)]
        self.assert_structure();
    }

    /// Descends from the root to the bottom container whose range holds
    /// `value`. Ties route right.
    fn locate(&mut self, value: i64) -> Id {
        let mut cur = self.root;
        loop {
            let c = *self.arena.get(cur);
            if c.is_bottom() {
                return cur;
            }
            cur = if value >= c.vals[0] {
                if c.is_full() && value >= c.vals[1] {
                    c.kids[1]
                } else {
                    c.kids[0]
                }
            } else {
                c.below
            };
            self.observer.descent_step();
        }
    }

    fn insert_at_bottom(&mut self, bottom: Id, value: i64) {
        self.observer.bottom_insert();
        let c = *self.arena.get(bottom);
        debug_assert!(c.is_bottom());

        if !c.is_full() {
            let dst = self.arena.get_mut(bottom);
            if value >= dst.vals[0] {
                dst.vals[1] = value;
            } else {
                dst.vals[1] = dst.vals[0];
                dst.vals[0] = value;
            }
            dst.len = 2;
            return;
        }

        // Full bottom container: of {value, vals[0], vals[1]} the median
        // moves up, the lowest stays here and the highest fills the fresh
        // sibling that comes back from the promotion.
        let [v0, v1] = c.vals;
        self.arena.get_mut(bottom).len = 1;
        let (up, high) = if value >= v0 {
            if value >= v1 { (v1, value) } else { (value, v1) }
        } else {
            self.arena.get_mut(bottom).vals[0] = value;
            (v0, v1)
        };
        let fresh = self.promote(c.parent, up);
        let f = self.arena.get_mut(fresh);
        f.vals[0] = high;
        f.len = 1;
    }

    /// Inserts `value`, promoted from a child split, into `dest`.
    ///
    /// Returns the fresh empty container wired in as the child slot just
    /// above `value`'s final position; the caller fills it directly with
    /// the high half of its own split, no second locate pass.
    fn promote(&mut self, dest: Id, value: i64) -> Id {
        self.observer.promotion();
        let d = *self.arena.get(dest);

        if !d.is_full() {
            let fresh = self.arena.alloc();
            let dst = self.arena.get_mut(dest);
            if value >= dst.vals[0] {
                dst.vals[1] = value;
                dst.kids[1] = fresh;
            } else {
                // The held value moves to the high slot with its child.
                dst.vals[1] = dst.vals[0];
                dst.kids[1] = dst.kids[0];
                dst.vals[0] = value;
                dst.kids[0] = fresh;
            }
            dst.len = 2;
            self.arena.get_mut(fresh).parent = dest;
            return fresh;
        }

        // `dest` is full and splits. The median of {value, vals[0],
        // vals[1]} continues upward; `sib` is the fresh container one level
        // up, adjacent to the promoted median, and takes the high half of
        // the split. Whatever branch a value was associated with travels
        // with it.
        let [v0, v1] = d.vals;
        self.arena.get_mut(dest).len = 1;

        if value >= v0 {
            if value >= v1 {
                // v1 continues up; the sibling holds `value` and inherits
                // dest's high branch below it.
                let sib = self.promote_above(d.parent, v1);
                let fresh = self.arena.alloc();
                {
                    let s = self.arena.get_mut(sib);
                    s.below = d.kids[1];
                    s.vals[0] = value;
                    s.kids[0] = fresh;
                    s.len = 1;
                }
                self.arena.get_mut(d.kids[1]).parent = sib;
                self.arena.get_mut(fresh).parent = sib;
                fresh
            } else {
                // `value` is itself the median and continues up; the
                // sibling holds v1 with its old branch, and the fresh
                // container becomes the sibling's low branch.
                let sib = self.promote_above(d.parent, value);
                let fresh = self.arena.alloc();
                {
                    let s = self.arena.get_mut(sib);
                    s.below = fresh;
                    s.vals[0] = v1;
                    s.kids[0] = d.kids[1];
                    s.len = 1;
                }
                self.arena.get_mut(d.kids[1]).parent = sib;
                self.arena.get_mut(fresh).parent = sib;
                fresh
            }
        } else {
            // v0 continues up; dest keeps `value` in the low slot and the
            // sibling takes v1 together with both of dest's upper branches.
            let sib = self.promote_above(d.parent, v0);
            let fresh = self.arena.alloc();
            {
                let s = self.arena.get_mut(sib);
                s.below = d.kids[0];
                s.vals[0] = v1;
                s.kids[0] = d.kids[1];
                s.len = 1;
            }
            self.arena.get_mut(d.kids[0]).parent = sib;
            self.arena.get_mut(d.kids[1]).parent = sib;
            let dst = self.arena.get_mut(dest);
            dst.vals[0] = value;
            dst.kids[0] = fresh;
            self.arena.get_mut(fresh).parent = dest;
            fresh
        }
    }

    #[inline]
    fn promote_above(&mut self, parent: Id, value: i64) -> Id {
        if parent.is_nil() {
            self.raise_root(value)
        } else {
            self.promote(parent, value)
        }
    }

    /// The cascade reached a full root: a new root holding `value` is
    /// created above it, with the old root as its low branch. Returns the
    /// fresh `kids[0]` container for the caller to fill.
    fn raise_root(&mut self, value: i64) -> Id {
        self.observer.root_raised();
        let old_root = self.root;
        let new_root = self.arena.alloc();
        let fresh = self.arena.alloc();
        {
            let r = self.arena.get_mut(new_root);
            r.vals[0] = value;
            r.len = 1;
            r.below = old_root;
            r.kids[0] = fresh;
        }
        self.arena.get_mut(old_root).parent = new_root;
        self.arena.get_mut(fresh).parent = new_root;
        self.root = new_root;
        fresh
    }

    /// Whole-tree check: parent links, value ordering against subtree
    /// bounds, and uniform bottom depth. Bounds are inclusive because ties
    /// route right on insert but seeding and promotion may still leave
    /// equal values on either side of a separator.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn assert_structure(&self) {
        let mut bottom_depth = None;
        self.assert_subtree(self.root, Id::NIL, i64::MIN, i64::MAX, 0, &mut bottom_depth);
    }

    #[cfg(any(test, debug_assertions))]
    fn assert_subtree(
        &self,
        x: Id,
        parent: Id,
        lo: i64,
        hi: i64,
        depth: usize,
        bottom_depth: &mut Option<usize>,
    ) {
        assert!(!x.is_nil(), "nil child under parent {parent:?}");
        let c = self.arena.get(x);
        assert_eq!(c.parent, parent, "parent link of {x:?}");
        assert!(c.len == 1 || c.len == 2, "{x:?} holds {} values", c.len);
        assert!(
            lo <= c.vals[0] && c.vals[0] <= hi,
            "{x:?} value {} outside [{lo}, {hi}]",
            c.vals[0]
        );
        if c.is_full() {
            assert!(
                c.vals[0] <= c.vals[1] && c.vals[1] <= hi,
                "{x:?} values {:?} out of order for [{lo}, {hi}]",
                c.vals
            );
        }

        if c.is_bottom() {
            assert!(
                c.kids[0].is_nil() && c.kids[1].is_nil(),
                "bottom {x:?} with wired kids"
            );
            match *bottom_depth {
                None => *bottom_depth = Some(depth),
                Some(d) => assert_eq!(d, depth, "bottom containers at unequal depths"),
            }
            return;
        }

        self.assert_subtree(c.below, x, lo, c.vals[0], depth + 1, bottom_depth);
        let cap = if c.is_full() { c.vals[1] } else { hi };
        self.assert_subtree(c.kids[0], x, c.vals[0], cap, depth + 1, bottom_depth);
        if c.is_full() {
            self.assert_subtree(c.kids[1], x, c.vals[1], hi, depth + 1, bottom_depth);
        }
    }
}

fn sort3(a: i64, b: i64, c: i64) -> (i64, i64, i64) {
    let (lo, hi) = if b >= a { (a, b) } else { (b, a) };
    if c >= hi {
        (lo, hi, c)
    } else if c >= lo {
        (lo, c, hi)
    } else {
        (c, lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::flatten;
    use crate::observer::SortStats;

    fn build_and_check(values: &[i64]) {
        assert!(values.len() >= 3);
        let mut arena = Arena::for_input_len(values.len());
        let mut nop = ();
        let mut tree = Tree::seed(&mut arena, &mut nop, [values[0], values[1], values[2]]);
        tree.assert_structure();
        for &v in &values[3..] {
            tree.insert(v);
            tree.assert_structure();
        }
        let root = tree.root();

        let mut out = values.to_vec();
        flatten::write_back(&arena, root, &mut out);
        let mut expected = values.to_vec();
        expected.sort_unstable();
        assert_eq!(out, expected, "input {values:?}");
        assert!(arena.len() <= values.len());
    }

    #[test]
    fn structure_holds_after_every_insert() {
        let mut rng = StdRng::seed_from_u64(0x9E3_2026);
        for &size in &[3_usize, 4, 5, 8, 16, 64, 256, 512] {
            let values: Vec<i64> = (0..size).map(|_| rng.random_range(-1000..1000)).collect();
            build_and_check(&values);
        }
    }

    #[test]
    fn ordered_inputs_keep_structure() {
        build_and_check(&(0..200).collect::<Vec<i64>>());
        build_and_check(&(0..200).rev().collect::<Vec<i64>>());
    }

    #[test]
    fn duplicate_runs_keep_structure() {
        build_and_check(&[5; 40]);
        build_and_check(&[3, 3, 3, 1, 1, 1, 2, 2, 2, 9, 9, 9]);
    }

    #[test]
    fn sort3_orders_all_permutations() {
        for perm in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
            [2, 2, 2],
            [1, 1, 2],
            [2, 1, 1],
        ] {
            let (lo, mid, hi) = sort3(perm[0], perm[1], perm[2]);
            assert!(lo <= mid && mid <= hi, "sort3({perm:?})");
        }
    }

    #[test]
    fn descending_cascades_raise_the_root() {
        let values: Vec<i64> = (0..100).rev().collect();
        let mut arena = Arena::for_input_len(values.len());
        let mut stats = SortStats::default();
        let root = {
            let mut tree = Tree::seed(&mut arena, &mut stats, [values[0], values[1], values[2]]);
            for &v in &values[3..] {
                tree.insert(v);
            }
            tree.assert_structure();
            tree.root()
        };

        let mut out = values.clone();
        flatten::write_back(&arena, root, &mut out);
        assert_eq!(out, (0..100).collect::<Vec<i64>>());

        assert_eq!(stats.bottom_inserts, 97);
        assert!(stats.root_raises >= 1);
        assert!(stats.promotions >= stats.root_raises);
    }
}
