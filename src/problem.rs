use crate::space::Action;
use crate::space::Cost;
use crate::space::Space;
use crate::space::State;

/// A single-start, single-goal search problem.
pub trait Problem<Sp, St, A, C>: std::fmt::Debug + Sized
where
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    fn space(&self) -> &Sp;
    fn start(&self) -> &St;
    fn goal(&self) -> &St;

    #[inline(always)]
    fn is_goal(&self, s: &St) -> bool {
        self.goal() == s
    }

    /// Creates a random instance in the same space.
    fn randomize<R: rand::Rng>(&self, r: &mut R, moves: usize) -> Self;
}
