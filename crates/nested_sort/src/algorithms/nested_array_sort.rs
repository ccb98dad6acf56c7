use crate::{NestContext, TUNED_PARAMS};

use super::common::{self, Entry, NONE, Run};

// Center-out sorted runs in a shared pool. A value is placed directly when
// the shift to the nearer run edge stays within `max_element_moves`;
// otherwise it falls through to the run hanging off the greatest element not
// above it. Each carve reserves room for every value that could still
// arrive, which trades memory for a hard bound on moves.
pub fn sort(data: &mut [i64], ctx: &mut NestContext) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let NestContext {
        entries,
        runs,
        run_stack,
        ..
    } = ctx;
    entries.clear();
    runs.clear();

    let top = common::carve(entries, runs, n, data[0]);
    for i in 1..n {
        insert(entries, runs, top, data[i], n - i);
    }

    common::write_back(entries, runs, top, data, run_stack);
}

fn insert(entries: &mut Vec<Entry>, runs: &mut Vec<Run>, top: u32, value: i64, remaining: usize) {
    let max_moves = TUNED_PARAMS.max_element_moves;
    let mut cur = top as usize;
    loop {
        let Run { first, last, .. } = runs[cur];
        match common::locate(entries, first, last, value) {
            // Below every element: the low edge takes it with zero moves.
            (_, None) => {
                common::insert_below(entries, &mut runs[cur], None, value);
                return;
            }
            (true, Some(pos)) if last - pos <= max_moves => {
                common::insert_above(entries, &mut runs[cur], pos, value);
                return;
            }
            (false, Some(pos)) if pos - first <= max_moves => {
                common::insert_below(entries, &mut runs[cur], Some(pos), value);
                return;
            }
            (_, Some(pos)) => {
                let nested = entries[pos].nested;
                if nested != NONE {
                    cur = nested as usize;
                } else {
                    let child = common::carve(entries, runs, remaining, value);
                    entries[pos].nested = child;
                    return;
                }
            }
        }
    }
}
