/// Actions an observer can take during the clustered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the best minima found so far.
    ///
    /// During sampling, the nodes evaluated so far are clustered and their
    /// seeds are returned unrefined.
    StopEarly,

    /// Discard this point.
    ///
    /// A rejected grid sample takes no part in clustering, and a rejected
    /// refinement candidate counts as `+∞` in the simplex.
    ///
    /// Use this for:
    /// - Recovering from objective failures or non-finite values in regions
    ///   where the objective is known to be undefined.
    /// - Excluding part of the domain even when evaluation succeeded.
    Reject,
}
