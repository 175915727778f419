use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::problems::sliding_puzzle::Depth;
use crate::problems::sliding_puzzle::PuzzleState;
use crate::space::Action;

/// A discovered state, with its path cost and heuristic estimate.
///
/// Nodes carry no ordering of their own. Frontiers decide how to rank them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PuzzleState,
    /// Moves since the start (g).
    pub depth: Depth,
    /// Estimated moves left (h).
    pub heuristic: Depth,
}

impl SearchNode {
    #[inline(always)]
    pub fn new(state: PuzzleState, depth: Depth, heuristic: Depth) -> Self {
        Self {
            state,
            depth,
            heuristic,
        }
    }

    /// f = g + h
    #[inline(always)]
    pub fn priority(&self) -> Depth {
        self.depth.saturating_add(self.heuristic)
    }
}

/// How a state was first reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Discovery<K, A> {
    Start,
    Reached { parent: K, action: A },
}

/// Every state ever enqueued, by key.
///
/// Entries are only ever added, and each state is added once, when it's first
/// pushed to a frontier. The discovery records double as the search tree.
pub struct VisitedSet<K, A>
where
    K: Copy + Debug + Eq + Hash,
    A: Action,
{
    map: FxHashMap<K, Discovery<K, A>>,
}

impl<K, A> VisitedSet<K, A>
where
    K: Copy + Debug + Eq + Hash,
    A: Action,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    #[inline(always)]
    pub fn seen(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Remembers a newly enqueued state.
    ///
    /// Returns `false`, keeping the first record, if the state was already
    /// seen.
    #[inline(always)]
    pub fn mark_seen(&mut self, key: K, discovery: Discovery<K, A>) -> bool {
        match self.map.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(discovery);
                true
            }
        }
    }

    pub fn discovery(&self, key: &K) -> Option<Discovery<K, A>> {
        self.map.get(key).copied()
    }

    /// Actions leading from the start to `key`.
    #[must_use]
    pub fn actions_to(&self, key: K) -> Option<Vec<A>> {
        let mut actions = vec![];
        let mut current = key;
        loop {
            match self.map.get(&current)? {
                Discovery::Start => break,
                Discovery::Reached { parent, action } => {
                    debug_assert!(*parent != current);
                    actions.push(*action);
                    current = *parent;
                }
            }
        }
        actions.reverse();
        Some(actions)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.map.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}

impl<K, A> Default for VisitedSet<K, A>
where
    K: Copy + Debug + Eq + Hash,
    A: Action,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A> std::fmt::Debug for VisitedSet<K, A>
where
    K: Copy + Debug + Eq + Hash,
    A: Action,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "VisitedSet{{({} states)}}", self.len())
    }
}
