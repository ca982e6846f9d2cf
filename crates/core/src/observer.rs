/// A hook that sees every evaluation a solver makes and may steer it.
///
/// Solvers call `observe` once per evaluation with a solver-specific event.
/// Returning `None` leaves the solver alone; returning `Some(action)` asks it
/// to act, for example to stop early or to discard the point just evaluated.
/// The actions a solver honors are listed in its own `Action` type.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
