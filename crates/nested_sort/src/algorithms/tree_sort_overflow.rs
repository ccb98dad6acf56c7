use crate::NestContext;

use super::common;

// Implicit binary tree in a flat slot array: the root sits at `size / 2` and
// descent halves an index stride, so slot order is value order. A value that
// runs out of stride joins the overflow run between its final slot and the
// next; runs are counted, carved contiguously from one pool, and insertion
// sorted during the write-back walk.
pub fn sort(data: &mut [i64], ctx: &mut NestContext) {
    let n = data.len();
    if n < 2 {
        return;
    }

    // Smallest power of two strictly greater than n, so the center slot and
    // every stride stay inside the array.
    let tree_size = (n + 1).next_power_of_two();

    let NestContext {
        slots,
        filled,
        counts,
        spill,
        spill_pool,
        ..
    } = ctx;
    slots.clear();
    slots.resize(tree_size, 0);
    filled.clear();
    filled.resize(tree_size, false);
    counts.clear();
    counts.resize(tree_size, 0);
    spill.clear();

    for &value in data.iter() {
        let mut idx = tree_size / 2;
        let mut stride = tree_size / 4;
        loop {
            if !filled[idx] {
                slots[idx] = value;
                filled[idx] = true;
                break;
            }
            if stride > 0 {
                idx = if value >= slots[idx] {
                    idx + stride
                } else {
                    idx - stride
                };
                stride /= 2;
            } else {
                // Bottom of the tree: the value belongs between this slot
                // and a neighbor. Bucket index is the lower of the two.
                let bucket = if value >= slots[idx] { idx } else { idx - 1 };
                counts[bucket] += 1;
                spill.push((value, bucket as u32));
                break;
            }
        }
    }

    // Prefix sums turn the bucket counts into running write cursors.
    let mut acc = 0u32;
    for c in counts.iter_mut() {
        let bucket_len = *c;
        *c = acc;
        acc += bucket_len;
    }
    spill_pool.clear();
    spill_pool.resize(spill.len(), 0);
    for &(value, bucket) in spill.iter() {
        let b = bucket as usize;
        spill_pool[counts[b] as usize] = value;
        counts[b] += 1;
    }
    // counts[b] now marks the end of bucket b's run.

    let mut at = 0usize;
    let mut run_start = 0usize;
    for i in 0..tree_size {
        if filled[i] {
            data[at] = slots[i];
            at += 1;
        }
        let run_end = counts[i] as usize;
        if run_end > run_start {
            let run = &mut spill_pool[run_start..run_end];
            common::insertion_sort(run);
            data[at..at + run.len()].copy_from_slice(run);
            at += run.len();
            run_start = run_end;
        }
    }
    debug_assert_eq!(at, n);
}
