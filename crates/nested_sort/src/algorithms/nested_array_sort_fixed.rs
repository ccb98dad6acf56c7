use crate::{NestContext, TUNED_PARAMS};

use super::common::{self, Entry, NONE, Run};

// Same run structure as the move-threshold variant, but a run accepts values
// directly only while it holds at most `max_array_len` elements, and every
// carve is the same fixed size. Occupancy never shrinks, so a run that has
// started spilling into nested runs keeps spilling.
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

    let top = common::carve(entries, runs, carve_span(), data[0]);
    for &value in &data[1..] {
        insert(entries, runs, top, value);
    }

    common::write_back(entries, runs, top, data, run_stack);
}

// A run holds at most `max_array_len + 1` values before the cap blocks it;
// the span leaves room for all of them on either side of the center slot.
#[inline]
fn carve_span() -> usize {
    TUNED_PARAMS.max_array_len + 2
}

fn insert(entries: &mut Vec<Entry>, runs: &mut Vec<Run>, top: u32, value: i64) {
    let max_len = TUNED_PARAMS.max_array_len;
    let mut cur = top as usize;
    loop {
        let Run { first, last, low } = runs[cur];
        let occupancy = last - first + 1;
        match common::locate(entries, first, last, value) {
            (_, None) if occupancy <= max_len => {
                common::insert_below(entries, &mut runs[cur], None, value);
                return;
            }
            // Below a full run there is no host element; such values go to
            // the run's low-side chain, which flattens ahead of it.
            (_, None) => {
                if low != NONE {
                    cur = low as usize;
                } else {
                    let child = common::carve(entries, runs, carve_span(), value);
                    runs[cur].low = child;
                    return;
                }
            }
            (true, Some(pos)) if occupancy <= max_len => {
                common::insert_above(entries, &mut runs[cur], pos, value);
                return;
            }
            (false, Some(pos)) if occupancy <= max_len => {
                common::insert_below(entries, &mut runs[cur], Some(pos), value);
                return;
            }
            (_, Some(pos)) => {
                let nested = entries[pos].nested;
                if nested != NONE {
                    cur = nested as usize;
                } else {
                    let child = common::carve(entries, runs, carve_span(), value);
                    entries[pos].nested = child;
                    return;
                }
            }
        }
    }
}
