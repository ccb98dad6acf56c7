pub const NONE: u32 = u32::MAX;

/// One slot of the shared element pool: the value plus the run of
/// between-values hanging off it, `NONE` when there is none.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub val: i64,
    pub nested: u32,
}

/// A sorted run carved out of the element pool. `first..=last` are absolute
/// pool indices. `low` is the run holding values below every element of this
/// one; only the fixed-size variant ever sets it.
#[derive(Clone, Copy, Debug)]
pub struct Run {
    pub first: usize,
    pub last: usize,
    pub low: u32,
}

/// Carves `2 * span` fresh entries and opens a run with `value` in the
/// middle, leaving `span - 1` free slots below and `span` above.
pub fn carve(entries: &mut Vec<Entry>, runs: &mut Vec<Run>, span: usize, value: i64) -> u32 {
    let base = entries.len();
    entries.resize(base + 2 * span, Entry { val: 0, nested: NONE });
    let slot = base + span - 1;
    entries[slot] = Entry { val: value, nested: NONE };
    let id = runs.len() as u32;
    runs.push(Run {
        first: slot,
        last: slot,
        low: NONE,
    });
    id
}

/// Positions `value` within `entries[first..=last]` (a sorted run): returns
/// whether it is at or above the run's median, and the greatest index whose
/// value does not exceed it, `None` when it is below every element. Equal
/// values resolve to the rightmost, so ties route right.
#[inline]
pub fn locate(entries: &[Entry], first: usize, last: usize, value: i64) -> (bool, Option<usize>) {
    let mid = (first + last) / 2;
    let above_median = value >= entries[mid].val;

    // Find the lowest index whose value exceeds `value`.
    let (mut lo, mut hi) = if above_median {
        (mid + 1, last + 1)
    } else {
        (first, mid)
    };
    while lo < hi {
        let m = (lo + hi) / 2;
        if value >= entries[m].val {
            lo = m + 1;
        } else {
            hi = m;
        }
    }

    if lo == first {
        (above_median, None)
    } else {
        (above_median, Some(lo - 1))
    }
}

pub fn insert_above(entries: &mut [Entry], run: &mut Run, pos: usize, value: i64) {
    entries.copy_within(pos + 1..run.last + 1, pos + 2);
    entries[pos + 1] = Entry {
        val: value,
        nested: NONE,
    };
    run.last += 1;
}

// `pos == None` puts the value below everything; nothing has to move.
pub fn insert_below(entries: &mut [Entry], run: &mut Run, pos: Option<usize>, value: i64) {
    match pos {
        Some(pos) => {
            entries.copy_within(run.first..pos + 1, run.first - 1);
            entries[pos] = Entry {
                val: value,
                nested: NONE,
            };
        }
        None => {
            entries[run.first - 1] = Entry {
                val: value,
                nested: NONE,
            };
        }
    }
    run.first -= 1;
}

/// In-order walk over the run forest: a run's low-side chain, then each
/// element followed by its nested run. Iterative, so nest depth cannot
/// exhaust the call stack.
pub fn write_back(
    entries: &[Entry],
    runs: &[Run],
    top: u32,
    out: &mut [i64],
    stack: &mut Vec<(u32, usize)>,
) {
    stack.clear();
    push_run(runs, stack, top);

    let mut at = 0usize;
    while let Some((run, start)) = stack.pop() {
        let last = runs[run as usize].last;
        let mut i = start;
        while i <= last {
            let entry = entries[i];
            out[at] = entry.val;
            at += 1;
            i += 1;
            if entry.nested != NONE {
                if i <= last {
                    stack.push((run, i));
                }
                push_run(runs, stack, entry.nested);
                break;
            }
        }
    }

    debug_assert_eq!(at, out.len());
}

// The low-side chain is pushed after the run itself so the stack pops the
// innermost (lowest-valued) run first.
fn push_run(runs: &[Run], stack: &mut Vec<(u32, usize)>, run: u32) {
    let mut cur = run;
    loop {
        stack.push((cur, runs[cur as usize].first));
        cur = runs[cur as usize].low;
        if cur == NONE {
            break;
        }
    }
}

#[inline]
pub fn insertion_sort(data: &mut [i64]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        // Hot loop: unchecked accesses remove repeated bounds checks.
        unsafe {
            while j > 0 {
                let prev = *data.get_unchecked(j - 1);
                if prev <= key {
                    break;
                }
                *data.get_unchecked_mut(j) = prev;
                j -= 1;
            }
            *data.get_unchecked_mut(j) = key;
        }
    }
}
