pub mod common;
pub mod nested_array_sort;
pub mod nested_array_sort_fixed;
pub mod trail_sort;
pub mod tree_sort_linked;
pub mod tree_sort_overflow;
