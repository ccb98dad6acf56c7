mod arena;
mod container;
mod flatten;
mod observer;
mod tree;

pub use arena::Arena;
pub use observer::{SortObserver, SortStats};

/// Sorts `data` in place with an internal arena sized for the input.
pub fn sort_i64(data: &mut [i64]) {
    let mut arena = Arena::for_input_len(data.len());
    sort_i64_with_observer(data, &mut arena, &mut ());
}

/// Sorts `data` in place with a caller-owned arena, so repeated sorts can
/// reuse one allocation. The arena is reset on entry; it only needs to be
/// sized for the largest input it will see.
pub fn sort_i64_with_arena(data: &mut [i64], arena: &mut Arena) {
    sort_i64_with_observer(data, arena, &mut ());
}

/// [`sort_i64_with_arena`] with an injected [`SortObserver`] receiving
/// structural events.
pub fn sort_i64_with_observer<O: SortObserver>(
    data: &mut [i64],
    arena: &mut Arena,
    observer: &mut O,
) {
    arena.reset();
    match data.len() {
        0 | 1 => {}
        2 => {
            if data[0] > data[1] {
                data.swap(0, 1);
            }
        }
        _ => {
            let root = {
                let mut tree = tree::Tree::seed(arena, observer, [data[0], data[1], data[2]]);
                for &value in &data[3..] {
                    tree.insert(value);
                }
                tree.root()
            };
            flatten::write_back(arena, root, data);
            debug_assert!(arena.len() <= data.len());
        }
    }
}
