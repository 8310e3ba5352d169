//! Solver capability: anything that takes a [`LinearProblem`] and reports
//! an [`Outcome`].

mod microlp;
pub mod outcome;

pub use microlp::MicroLpSolver;
pub use outcome::{Assignment, Outcome, SolveStatus};

use crate::model::LinearProblem;

/// A linear/integer programming engine.
///
/// Implementations receive the fully assembled problem and return raw
/// variable values indexed by `VarId`. They must not return a default
/// assignment for a problem they could not solve.
pub trait Solver {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    fn solve(&self, problem: &LinearProblem) -> Outcome<Assignment>;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, problem: &LinearProblem) -> Outcome<Assignment> {
        (**self).solve(problem)
    }
}
