use std::cmp::min;
use std::fmt::Debug;

type HeapIndex = usize;

// Heap indices, for an arity of A.
//
// ```text
//                 0
//        1        2  ..  A
//   A+1 .. 2A   2A+1 ..
// ```
//
//   - Up:           `(i-1) / A`
//   - First child:  `A*i + 1`
//   - Last child:   `A*(i+1)`
const HEAP_ARITY: usize = 4usize;

/// The parent node
///
/// ```
/// use slide::data_structures::dary_heap::index_parent;
/// assert_eq!(index_parent::<2>(1), 0);
/// assert_eq!(index_parent::<2>(2), 0);
/// assert_eq!(index_parent::<2>(25), 12);
/// assert_eq!(index_parent::<4>(4), 0);
/// assert_eq!(index_parent::<4>(5), 1);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const A: usize>(i: usize) -> usize {
    (i - 1) / A
}

/// The first (left-most) children
///
/// ```
/// use slide::data_structures::dary_heap::index_first_children;
/// assert_eq!(index_first_children::<2>(0), 1);
/// assert_eq!(index_first_children::<2>(3), 7);
/// assert_eq!(index_first_children::<4>(1), 5);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_children<const A: usize>(i: usize) -> usize {
    (A * i) + 1
}

#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    index_first_children::<HEAP_ARITY>(i)
}

/// A min-heap with a wider fan-out than `std::collections::BinaryHeap`.
///
/// Shallower trees trade a few more comparisons per level for fewer levels,
/// which suits the short, cheap-to-compare ranks of search frontiers.
#[derive(Debug, Clone)]
pub struct DaryHeap<N>
where
    N: Debug + Ord,
{
    heap: Vec<N>,
}

impl<N> DaryHeap<N>
where
    N: Debug + Ord,
{
    pub fn new() -> Self {
        Self { heap: vec![] }
    }
    pub fn with_capacity(s: usize) -> Self {
        Self {
            heap: Vec::with_capacity(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn peek(&self) -> Option<&N> {
        self.heap.first()
    }

    /// Pushes a node, returning where it ended up.
    pub fn push(&mut self, n: N) -> HeapIndex {
        self.verify_heap();
        let heap_index = self.heap.len(); // Future heap_index

        self.heap.push(n);
        let heap_index = self.sift_up(heap_index);

        self.verify_heap();
        heap_index
    }

    pub fn pop(&mut self) -> Option<N> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("Pop");

        self.verify_heap();
        if self.heap.len() <= 1 {
            return self.heap.pop();
        }

        // The last node takes the hole at the root and sinks back down.
        let top = self.heap.swap_remove(0);
        self.sift_down(0);

        self.verify_heap();
        Some(top)
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }

    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every node goes after its parent node, if any.
        for i in 1..self.heap.len() {
            let p = up(i);
            debug_assert!(
                self.heap[p] <= self.heap[i],
                "Node[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.heap[p],
                self.heap[i],
                self.heap.len(),
            );
        }
    }

    /// Raises a node
    /// Returns it's new index
    #[inline(always)]
    fn sift_up(&mut self, index: HeapIndex) -> HeapIndex {
        debug_assert!(index < self.heap.len(), "Index out of bounds...");

        let mut pos = index;
        while pos > 0 {
            let parent = up(pos);
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    /// Lowers a node
    /// Returns it's new index
    #[inline(always)]
    fn sift_down(&mut self, mut index: HeapIndex) -> HeapIndex {
        let len = self.heap.len();
        debug_assert!(index < len, "Index out of bounds...");

        loop {
            let first = down_left(index);
            if first >= len {
                break;
            }

            // Find the best child
            let mut child = first;
            for c in (first + 1)..min(first + HEAP_ARITY, len) {
                if self.heap[c] < self.heap[child] {
                    child = c;
                }
            }

            if self.heap[index] <= self.heap[child] {
                break;
            }

            self.heap.swap(index, child);
            index = child;
        }
        index
    }
}

impl<N> Default for DaryHeap<N>
where
    N: Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_works() {
        let mut heap = DaryHeap::<String>::new();

        heap.push("aoeu".to_string());
        assert_eq!(heap.peek().map(String::as_str), Some("aoeu"));
        assert_eq!(heap.pop(), Some("aoeu".to_string()));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn heap_sorts() {
        let mut heap = DaryHeap::<&str>::new();

        assert_eq!(heap.push("c"), 0usize);
        assert_eq!(heap.push("e"), 1usize);
        assert_eq!(heap.push("f"), 2usize);
        assert_eq!(heap.push("a"), 0usize);
        assert_eq!(heap.push("d"), 4usize);
        assert_eq!(heap.push("b"), 1usize);
        assert_eq!(heap.len(), 6);

        for expected in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(heap.pop(), Some(expected));
        }
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn heap_sorts_many() {
        let mut heap = DaryHeap::<u32>::with_capacity(128);
        // A fixed permutation of 0..101
        for i in 0..101u32 {
            heap.push((i * 37) % 101);
        }
        for expected in 0..101u32 {
            assert_eq!(heap.pop(), Some(expected));
        }
    }
}
