use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Most neighbours a single expansion may produce.
pub const MAX_NEIGHBOURS: usize = 4;

pub type Neighbours<St, A> = SmallVec<[(St, A); MAX_NEIGHBOURS]>;

pub trait Action: Copy + Clone + Debug + PartialEq + Eq {}

/// A search state.
///
/// States are identified by their canonical key, which is what dedup guards
/// remember instead of the full state.
pub trait State: Copy + Clone + Debug + PartialEq + Eq + Hash {
    type Key: Copy + Clone + Debug + PartialEq + Eq + Hash;

    /// A total, injective and stable encoding of this state.
    fn canonical_key(&self) -> Self::Key;
}

pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + num_traits::One
    + std::ops::Add<Self, Output = Self>
    + std::ops::AddAssign
{
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub start: St,
    pub end: St,
    pub cost: C,
    pub actions: Vec<A>,
}

impl<St, A, C> Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn new_from_start(start: St) -> Self {
        Self {
            start,
            end: start,
            cost: C::zero(),
            actions: vec![],
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Runs sanity checks
    #[inline(always)]
    pub fn seems_valid(&self) -> bool {
        self.cost.valid() && (!self.is_empty() || self.start == self.end)
    }

    /// Extends the path with an action that led to `s`.
    #[inline(always)]
    pub fn append(&mut self, last_action: (St, A), c: C) {
        let (s, a) = last_action;
        self.actions.push(a);
        self.end = s;
        self.cost = self.cost.saturating_add(&c);
    }
}

impl<St, A, C> std::fmt::Display for Path<St, A, C>
where
    St: State,
    A: Action + std::fmt::Display,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Path({}, ", self.cost)?;
        for a in &self.actions {
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}

pub trait Space<St, A, C>: Clone + std::fmt::Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    fn apply(&self, s: &St, a: &A) -> Option<St>;

    fn cost(&self, _s: &St, _a: &A) -> C {
        C::one()
    }
    /// Expands a State
    fn neighbours(&self, s: &St) -> Neighbours<St, A>;
    /// Verify is a State is valid.
    fn valid(&self, s: &St) -> bool;

    /// Replays the path and checks it ends where it claims to.
    fn valid_path(&self, p: &Path<St, A, C>) -> bool {
        if !self.valid(&p.start) {
            return false;
        }
        let mut state: St = p.start;
        let mut cost = C::zero();
        for a in &p.actions {
            match self.apply(&state, a) {
                Some(new_state) => {
                    cost = cost.saturating_add(&self.cost(&state, a));
                    state = new_state;
                }
                None => return false,
            }
        }
        p.end == state && p.cost == cost
    }
}
