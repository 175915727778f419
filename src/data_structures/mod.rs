//! Containers backing the search frontiers.

pub mod dary_heap;
