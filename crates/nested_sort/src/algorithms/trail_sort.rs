use crate::NestContext;

use super::common::NONE;

// Binary search tree read as chains of same-direction edges ("trails"). Each
// node tracks the length of the trail hanging off it and its height within
// the trail containing it; when an insertion would push the two counters two
// apart, a rotation toward the longer side restores the balance, possibly
// cascading upward with the opposite direction. Rotations preserve search
// order no matter what the counters say, so the counters only steer shape.

/// `edge` is the side this node occupies under its parent. The containing
/// trail continues through `ch[edge]` and `height` counts the elements left
/// in it; the node's own trail hangs through the opposite child and
/// `trail_len` measures that chain.
#[derive(Clone, Copy, Debug)]
pub struct TrailNode {
    pub ch: [u32; 2],
    pub parent: u32,
    pub val: i64,
    pub trail_len: u32,
    pub height: u32,
    pub edge: u8,
}

// Sentinel above the peak. Its infinite height absorbs every cascade; its
// greater child is the peak, re-read after every insert because shifts can
// replace it.
const TOP: u32 = 0;

pub fn sort(data: &mut [i64], ctx: &mut NestContext) {
    if data.len() < 2 {
        return;
    }

    let NestContext { trail, stack, .. } = ctx;
    trail.clear();
    trail.reserve(data.len() + 1);
    trail.push(TrailNode {
        ch: [NONE, 1],
        parent: NONE,
        val: 0,
        trail_len: 1,
        height: u32::MAX,
        edge: 0,
    });
    trail.push(TrailNode {
        ch: [NONE, NONE],
        parent: TOP,
        val: data[0],
        trail_len: 0,
        height: 0,
        edge: 1,
    });

    for &value in &data[1..] {
        insert(trail, value);
    }

    // In-order walk from the final peak.
    stack.clear();
    let mut cur = trail[TOP as usize].ch[1];
    let mut at = 0usize;
    loop {
        while cur != NONE {
            stack.push(cur);
            cur = trail[cur as usize].ch[0];
        }
        let Some(top) = stack.pop() else { break };
        data[at] = trail[top as usize].val;
        at += 1;
        cur = trail[top as usize].ch[1];
    }
    debug_assert_eq!(at, data.len());
}

fn insert(nodes: &mut Vec<TrailNode>, value: i64) {
    let mut cur = nodes[TOP as usize].ch[1];
    loop {
        let d = usize::from(value >= nodes[cur as usize].val);
        let next = nodes[cur as usize].ch[d];
        if next == NONE {
            let id = nodes.len() as u32;
            nodes.push(TrailNode {
                ch: [NONE, NONE],
                parent: cur,
                val: value,
                trail_len: 0,
                height: 0,
                edge: d as u8,
            });
            nodes[cur as usize].ch[d] = id;
            update(nodes, cur, d);
            return;
        }
        cur = next;
    }
}

// Walks ancestors from the end of the trail that just grew in direction `d`.
// Along the same-direction chain a node either absorbs the growth into its
// height or, when height would outrun its trail by two, shifts the trail.
// Past the chain top the node either absorbs the growth into its trail
// length or, when the trail already outruns the height, shifts the parent
// and continues the cascade the other way.
fn update(nodes: &mut [TrailNode], mut x: u32, mut d: usize) {
    loop {
        while nodes[x as usize].edge as usize == d {
            let xi = x as usize;
            if nodes[xi].height != nodes[xi].trail_len + 1 {
                nodes[xi].height += 1;
                x = nodes[xi].parent;
            } else {
                shift_trail(nodes, x, d);
                return;
            }
        }

        let xi = x as usize;
        if nodes[xi].trail_len <= nodes[xi].height {
            nodes[xi].trail_len += 1;
            return;
        }

        x = shift_parent(nodes, x, d);
        d = 1 - d;
    }
}

// The containing trail below x outgrew x's own trail: its next element g
// rotates above x. x sits on side `d` of its parent; g takes that slot, x
// becomes g's opposite child, and g's old opposite child moves under x with
// its counters transposed.
fn shift_trail(nodes: &mut [TrailNode], x: u32, d: usize) {
    let o = 1 - d;
    let xi = x as usize;
    let g = nodes[xi].ch[d];
    let gi = g as usize;
    let c = nodes[gi].ch[o];
    let p = nodes[xi].parent;

    nodes[p as usize].ch[d] = g;
    nodes[gi].ch[o] = x;
    nodes[gi].parent = p;
    nodes[gi].trail_len = nodes[xi].trail_len + 1;

    nodes[xi].parent = g;
    nodes[xi].ch[d] = c;
    nodes[xi].height = nodes[xi].trail_len;
    nodes[xi].edge = o as u8;

    adopt_transposed(nodes, x, c, d);
}

// Rotates the head of x's trail into x's slot when x hangs on the opposite
// side. The head inherits x's counters plus the growth, x keeps its height,
// and the cascade resumes at x's old parent.
fn shift_parent(nodes: &mut [TrailNode], x: u32, d: usize) -> u32 {
    let o = 1 - d;
    let xi = x as usize;
    let g = nodes[xi].ch[d];
    let gi = g as usize;
    let c = nodes[gi].ch[o];
    let p = nodes[xi].parent;

    nodes[p as usize].ch[o] = g;
    nodes[gi].ch[o] = x;
    nodes[gi].parent = p;
    nodes[gi].trail_len = nodes[xi].trail_len;
    nodes[gi].height = nodes[xi].height + 1;
    nodes[gi].edge = o as u8;

    nodes[xi].parent = g;
    nodes[xi].ch[d] = c;

    adopt_transposed(nodes, x, c, d);

    p
}

// After a shift, the moved child changes trail direction: its trail and
// height swap roles, and x's trail now runs through it.
fn adopt_transposed(nodes: &mut [TrailNode], x: u32, c: u32, d: usize) {
    let xi = x as usize;
    if c == NONE {
        nodes[xi].trail_len = 0;
        return;
    }
    let ci = c as usize;
    let len = nodes[ci].trail_len;
    nodes[ci].trail_len = nodes[ci].height;
    nodes[ci].height = len;
    nodes[ci].edge = d as u8;
    nodes[ci].parent = x;
    nodes[xi].trail_len = len + 1;
}
