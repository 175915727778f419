//! Pending search nodes, and the order they're expanded in.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::algorithms::astar::AStarRank;
use crate::data_structures::dary_heap::DaryHeap;
use crate::search::SearchNode;

pub trait Frontier: Debug + Default {
    fn push(&mut self, node: SearchNode);
    fn pop(&mut self) -> Option<SearchNode>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserved slots. Only used for memory statistics.
    fn capacity(&self) -> usize;
    /// Size of each reserved slot.
    fn slot_size(&self) -> usize;
}

/// Expands nodes in discovery order.
///
/// With unit move costs discovery order never decreases in depth, so this
/// alone realises uniform-cost search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchNode>,
}

impl Frontier for FifoFrontier {
    #[inline(always)]
    fn push(&mut self, node: SearchNode) {
        debug_assert!(
            self.queue.back().is_none_or(|last| last.depth <= node.depth),
            "Discovery order must not decrease in depth"
        );
        self.queue.push_back(node);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.queue.len()
    }
    fn capacity(&self) -> usize {
        self.queue.capacity()
    }
    fn slot_size(&self) -> usize {
        std::mem::size_of::<SearchNode>()
    }
}

/// A heap node for A*
///
/// Carries the rank next to the node so that comparisons don't need to look
/// at the state.
#[derive(Debug)]
pub struct AStarHeapNode {
    /// The rank of this node that defines how good it is.
    pub rank: AStarRank,
    /// Ignored when ranking.
    pub node: SearchNode,
}

/// PartialEq is forwarded to self.rank's PartialEq
impl PartialEq for AStarHeapNode {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl Eq for AStarHeapNode {}

impl PartialOrd for AStarHeapNode {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
/// Ord is forwarded to self.rank's Ord
impl Ord for AStarHeapNode {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Expands nodes by ascending `AStarRank`.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    open: DaryHeap<AStarHeapNode>,
    /// Nodes pushed so far. Stamps every rank with its insertion order.
    pushed: u64,
}

impl Frontier for PriorityFrontier {
    #[inline(always)]
    fn push(&mut self, node: SearchNode) {
        let rank = AStarRank::new(node.depth, node.heuristic, self.pushed);
        self.pushed += 1;
        self.open.push(AStarHeapNode { rank, node });
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<SearchNode> {
        self.open.pop().map(|n| n.node)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.open.len()
    }
    fn capacity(&self) -> usize {
        self.open.capacity()
    }
    fn slot_size(&self) -> usize {
        std::mem::size_of::<AStarHeapNode>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::sliding_puzzle::PuzzleState;

    fn node(depth: u32, heuristic: u32) -> SearchNode {
        SearchNode::new(PuzzleState::solved(2).unwrap(), depth, heuristic)
    }

    fn drain<F: Frontier>(mut frontier: F) -> Vec<(u32, u32)> {
        let mut out = vec![];
        while let Some(n) = frontier.pop() {
            out.push((n.depth, n.heuristic));
        }
        assert!(frontier.is_empty());
        out
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut frontier = FifoFrontier::default();
        for (g, h) in [(0, 9), (1, 3), (1, 0), (2, 5)] {
            frontier.push(node(g, h));
        }
        assert_eq!(frontier.len(), 4);
        assert_eq!(drain(frontier), vec![(0, 9), (1, 3), (1, 0), (2, 5)]);
    }

    #[test]
    fn priority_orders_by_f_then_g() {
        let mut frontier = PriorityFrontier::default();
        for (g, h) in [(3, 3), (1, 4), (4, 1), (2, 3), (0, 6), (2, 2)] {
            frontier.push(node(g, h));
        }
        assert_eq!(frontier.len(), 6);
        assert_eq!(
            drain(frontier),
            vec![(2, 2), (1, 4), (2, 3), (4, 1), (0, 6), (3, 3)]
        );
    }

    #[test]
    fn priority_is_fifo_on_full_ties() {
        let first = SearchNode::new(PuzzleState::solved(2).unwrap(), 1, 1);
        let second = SearchNode::new(PuzzleState::try_from("1 2/0 3").unwrap(), 1, 1);
        let mut frontier = PriorityFrontier::default();
        frontier.push(first);
        frontier.push(second);
        frontier.push(node(0, 2));

        assert_eq!(frontier.pop().map(|n| n.depth), Some(0));
        assert_eq!(frontier.pop(), Some(first));
        assert_eq!(frontier.pop(), Some(second));
        assert_eq!(frontier.pop(), None);
    }
}
