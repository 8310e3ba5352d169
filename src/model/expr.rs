use std::fmt;

use serde::Serialize;

use crate::model::declare::Domain;

/// Index of a decision variable inside a [`LinearProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VarId(pub usize);

/// Affine expression `constant + Σ coefficient·x[var]`.
///
/// Terms are kept sorted by variable with at most one entry per variable and
/// no zero coefficients, so two expressions built from the same data compare
/// equal regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constant(value: f64) -> Self {
        Self {
            terms: Vec::new(),
            constant: value,
        }
    }

    /// Add `coefficient·x[var]`, merging with an existing term for `var`.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        match self.terms.binary_search_by_key(&var, |(v, _)| *v) {
            Ok(pos) => {
                self.terms[pos].1 += coefficient;
                if self.terms[pos].1 == 0.0 {
                    self.terms.remove(pos);
                }
            }
            Err(pos) => {
                if coefficient != 0.0 {
                    self.terms.insert(pos, (var, coefficient));
                }
            }
        }
    }

    pub fn with_term(mut self, var: VarId, coefficient: f64) -> Self {
        self.add_term(var, coefficient);
        self
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    /// True when no variable appears, e.g. a nutrient nothing supplies.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms
            .binary_search_by_key(&var, |(v, _)| *v)
            .map(|pos| self.terms[pos].1)
            .unwrap_or(0.0)
    }

    /// Value of the expression at `values` (indexed by `VarId`).
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.constant
            + self
                .terms
                .iter()
                .map(|(v, c)| c * values.get(v.0).copied().unwrap_or(0.0))
                .sum::<f64>()
    }

    /// Render with variable names, e.g. `2*x[F1] + 5*x[F2]`.
    pub fn display_with<'a>(&'a self, names: &'a [String]) -> impl fmt::Display + 'a {
        ExprDisplay { expr: self, names }
    }
}

struct ExprDisplay<'a> {
    expr: &'a LinearExpr,
    names: &'a [String],
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expr.terms.is_empty() {
            return write!(f, "{}", self.expr.constant);
        }

        for (i, (var, coef)) in self.expr.terms.iter().enumerate() {
            let name = self
                .names
                .get(var.0)
                .map(String::as_str)
                .unwrap_or("?");
            if i > 0 {
                write!(f, " {} ", if *coef < 0.0 { "-" } else { "+" })?;
            } else if *coef < 0.0 {
                write!(f, "-")?;
            }
            write!(f, "{}*x[{}]", coef.abs(), name)?;
        }

        if self.expr.constant != 0.0 {
            let sign = if self.expr.constant < 0.0 { "-" } else { "+" };
            write!(f, " {} {}", sign, self.expr.constant.abs())?;
        }
        Ok(())
    }
}

/// `lower ≤ expr ≤ upper`; an infinite side is absent.
///
/// Equal bounds make this an equality constraint without any special form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearConstraint {
    pub name: String,
    pub expr: LinearExpr,
    pub lower: f64,
    pub upper: f64,
}

impl LinearConstraint {
    pub fn ranged(name: impl Into<String>, lower: f64, expr: LinearExpr, upper: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            lower,
            upper,
        }
    }

    pub fn at_most(name: impl Into<String>, expr: LinearExpr, upper: f64) -> Self {
        Self::ranged(name, f64::NEG_INFINITY, expr, upper)
    }

    pub fn is_equality(&self) -> bool {
        self.lower == self.upper
    }

    pub fn has_lower(&self) -> bool {
        self.lower.is_finite()
    }

    pub fn has_upper(&self) -> bool {
        self.upper.is_finite()
    }

    /// Check the constraint at `values` with absolute tolerance `tol`.
    pub fn is_satisfied(&self, values: &[f64], tol: f64) -> bool {
        let v = self.expr.evaluate(values);
        v >= self.lower - tol && v <= self.upper + tol
    }

    /// Slack to the nearest finite bound at `values`.
    pub fn slack(&self, values: &[f64]) -> f64 {
        let v = self.expr.evaluate(values);
        (v - self.lower).min(self.upper - v)
    }

    pub fn display_with<'a>(&'a self, names: &'a [String]) -> impl fmt::Display + 'a {
        ConstraintDisplay {
            constraint: self,
            names,
        }
    }
}

struct ConstraintDisplay<'a> {
    constraint: &'a LinearConstraint,
    names: &'a [String],
}

impl fmt::Display for ConstraintDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.constraint;
        let expr = c.expr.display_with(self.names);
        if c.is_equality() {
            write!(f, "{} == {}", expr, c.lower)
        } else {
            match (c.has_lower(), c.has_upper()) {
                (true, true) => write!(f, "{} <= {} <= {}", c.lower, expr, c.upper),
                (true, false) => write!(f, "{} >= {}", expr, c.lower),
                (false, true) => write!(f, "{} <= {}", expr, c.upper),
                (false, false) => write!(f, "{} free", expr),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sense {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Objective {
    pub name: String,
    pub sense: Sense,
    pub expr: LinearExpr,
}

/// One decision variable of the problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionVariable {
    pub name: String,
    pub domain: Domain,
}

/// A fully assembled problem, the single unit handed to a solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearProblem {
    pub variables: Vec<DecisionVariable>,
    pub objective: Objective,
    pub constraints: Vec<LinearConstraint>,
}

impl LinearProblem {
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|v| v.name.clone()).collect()
    }

    /// Names of the constraints violated at `values`.
    pub fn violated_constraints(&self, values: &[f64], tol: f64) -> Vec<&str> {
        self.constraints
            .iter()
            .filter(|c| !c.is_satisfied(values, tol))
            .map(|c| c.name.as_str())
            .collect()
    }
}
