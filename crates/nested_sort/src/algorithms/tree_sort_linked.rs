use crate::NestContext;

use super::common::NONE;

#[derive(Clone, Copy, Debug)]
pub struct BstNode {
    pub ch: [u32; 2],
    pub val: i64,
}

// Plain binary search tree over index-linked nodes; ties descend right.
// Ordered inputs degenerate the tree into a spine.
pub fn sort(data: &mut [i64], ctx: &mut NestContext) {
    if data.len() < 2 {
        return;
    }

    let NestContext { bst, stack, .. } = ctx;
    bst.clear();
    bst.reserve(data.len());
    bst.push(BstNode {
        ch: [NONE; 2],
        val: data[0],
    });

    for &value in &data[1..] {
        let mut cur = 0usize;
        loop {
            let dir = usize::from(value >= bst[cur].val);
            let next = bst[cur].ch[dir];
            if next == NONE {
                let id = bst.len() as u32;
                bst[cur].ch[dir] = id;
                bst.push(BstNode {
                    ch: [NONE; 2],
                    val: value,
                });
                break;
            }
            cur = next as usize;
        }
    }

    // In-order walk; the explicit stack holds as much spine as the tree can
    // produce.
    stack.clear();
    let mut cur = 0u32;
    let mut at = 0usize;
    loop {
        while cur != NONE {
            stack.push(cur);
            cur = bst[cur as usize].ch[0];
        }
        let Some(top) = stack.pop() else { break };
        data[at] = bst[top as usize].val;
        at += 1;
        cur = bst[top as usize].ch[1];
    }
    debug_assert_eq!(at, data.len());
}
