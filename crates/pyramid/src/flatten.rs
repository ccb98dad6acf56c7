use crate::arena::{Arena, Id};

/// Writes the tree's values into `out` in non-decreasing order via an
/// in-order walk. The running index is threaded through the recursion, so
/// repeated sorts share no state.
pub(crate) fn write_back(arena: &Arena, root: Id, out: &mut [i64]) {
    let end = emit(arena, root, out, 0);
    debug_assert_eq!(end, out.len());
}

fn emit(arena: &Arena, x: Id, out: &mut [i64], mut idx: usize) -> usize {
    let c = arena.get(x);
    if c.is_bottom() {
        out[idx] = c.vals[0];
        idx += 1;
        if c.is_full() {
            out[idx] = c.vals[1];
            idx += 1;
        }
        return idx;
    }

    idx = emit(arena, c.below, out, idx);
    out[idx] = c.vals[0];
    idx += 1;
    idx = emit(arena, c.kids[0], out, idx);
    if c.is_full() {
        out[idx] = c.vals[1];
        idx += 1;
        idx = emit(arena, c.kids[1], out, idx);
    }
    idx
}
