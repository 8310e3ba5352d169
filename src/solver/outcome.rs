//! Terminal statuses reported by a solve.

use std::fmt;

use serde::Serialize;

/// Status of a finished solve, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Error,
}

impl SolveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded => "unbounded",
            SolveStatus::Error => "error",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a solve.
///
/// Only `Optimal` carries a solution. Infeasible and unbounded problems are
/// ordinary outcomes, not errors, so callers branch on them directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Optimal(T),
    Infeasible,
    Unbounded,
    Error(String),
}

impl<T> Outcome<T> {
    pub fn status(&self) -> SolveStatus {
        match self {
            Outcome::Optimal(_) => SolveStatus::Optimal,
            Outcome::Infeasible => SolveStatus::Infeasible,
            Outcome::Unbounded => SolveStatus::Unbounded,
            Outcome::Error(_) => SolveStatus::Error,
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, Outcome::Optimal(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, Outcome::Infeasible)
    }

    pub fn optimal(&self) -> Option<&T> {
        match self {
            Outcome::Optimal(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_optimal(self) -> Option<T> {
        match self {
            Outcome::Optimal(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the optimal payload; other statuses pass through.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Optimal(value) => f(value),
            Outcome::Infeasible => Outcome::Infeasible,
            Outcome::Unbounded => Outcome::Unbounded,
            Outcome::Error(msg) => Outcome::Error(msg),
        }
    }
}

/// Raw variable values returned by a solver, indexed by `VarId`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub values: Vec<f64>,
    pub objective: f64,
}
