mod algorithms;

use algorithms::common::{Entry, Run};
use algorithms::trail_sort::TrailNode;
use algorithms::tree_sort_linked::BstNode;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NestAlgorithm {
    NestedArraySort,
    NestedArraySortFixed,
    TreeSortOverflow,
    TreeSortLinked,
    TrailSort,
    PyramidSort,
}

pub const ALL_ALGORITHMS: [NestAlgorithm; 6] = [
    NestAlgorithm::NestedArraySort,
    NestAlgorithm::NestedArraySortFixed,
    NestAlgorithm::TreeSortOverflow,
    NestAlgorithm::TreeSortLinked,
    NestAlgorithm::TrailSort,
    NestAlgorithm::PyramidSort,
];

pub fn all_algorithms() -> &'static [NestAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: NestAlgorithm) -> &'static str {
    match algo {
        NestAlgorithm::NestedArraySort => "nested_array_sort",
        NestAlgorithm::NestedArraySortFixed => "nested_array_sort_fixed",
        NestAlgorithm::TreeSortOverflow => "tree_sort_overflow",
        NestAlgorithm::TreeSortLinked => "tree_sort_linked",
        NestAlgorithm::TrailSort => "trail_sort",
        NestAlgorithm::PyramidSort => "pyramid_sort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub max_element_moves: usize,
    pub max_array_len: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    max_element_moves: 100,
    max_array_len: 100,
};

/// Reusable scratch for the whole family: element and run pools for the
/// nested-array variants, node arenas for the tree variants, and a container
/// arena for the pyramid sort. Every sort clears what it uses on entry, so
/// one context can serve repeated sorts of any mix of algorithms.
#[derive(Clone, Debug, Default)]
pub struct NestContext {
    pub(crate) entries: Vec<Entry>,
    pub(crate) runs: Vec<Run>,
    pub(crate) run_stack: Vec<(u32, usize)>,
    pub(crate) slots: Vec<i64>,
    pub(crate) filled: Vec<bool>,
    pub(crate) counts: Vec<u32>,
    pub(crate) spill: Vec<(i64, u32)>,
    pub(crate) spill_pool: Vec<i64>,
    pub(crate) bst: Vec<BstNode>,
    pub(crate) trail: Vec<TrailNode>,
    pub(crate) stack: Vec<u32>,
    pub(crate) pyramid: pyramid::Arena,
}

pub fn sort_i64(algo: NestAlgorithm, data: &mut [i64]) {
    let mut ctx = NestContext::default();
    sort_i64_with_ctx(algo, data, &mut ctx);
}

pub fn sort_i64_with_ctx(algo: NestAlgorithm, data: &mut [i64], ctx: &mut NestContext) {
    match algo {
        NestAlgorithm::NestedArraySort => algorithms::nested_array_sort::sort(data, ctx),
        NestAlgorithm::NestedArraySortFixed => algorithms::nested_array_sort_fixed::sort(data, ctx),
        NestAlgorithm::TreeSortOverflow => algorithms::tree_sort_overflow::sort(data, ctx),
        NestAlgorithm::TreeSortLinked => algorithms::tree_sort_linked::sort(data, ctx),
        NestAlgorithm::TrailSort => algorithms::trail_sort::sort(data, ctx),
        NestAlgorithm::PyramidSort => pyramid::sort_i64_with_arena(data, &mut ctx.pyramid),
    }
}
