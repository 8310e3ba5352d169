use good_lp::variable::{ProblemVariables, VariableDefinition};
use good_lp::{
    constraint, variable, Constraint, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use tracing::{debug, info};

use crate::model::constants::FEASIBILITY_TOLERANCE;
use crate::model::{DecisionVariable, Domain, LinearConstraint, LinearExpr, LinearProblem, Sense};
use crate::solver::{Assignment, Outcome, Solver};

/// Backend on `good_lp` with the pure-Rust microlp engine.
///
/// Integer variables are handled by microlp's branch and bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

impl Solver for MicroLpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, problem: &LinearProblem) -> Outcome<Assignment> {
        // Rows without variables are decided here; the engine is never
        // handed a constraint it cannot index.
        let mut rows = Vec::with_capacity(problem.constraints.len());
        for row in &problem.constraints {
            if row.expr.is_constant() {
                if !row.is_satisfied(&[], FEASIBILITY_TOLERANCE) {
                    info!(
                        constraint = %row.name,
                        value = row.expr.constant_term(),
                        lower = row.lower,
                        upper = row.upper,
                        "constraint without variables cannot hold"
                    );
                    return Outcome::Infeasible;
                }
                continue;
            }
            rows.push(row);
        }

        if problem.variables.is_empty() {
            return Outcome::Optimal(Assignment {
                values: Vec::new(),
                objective: problem.objective.expr.constant_term(),
            });
        }

        debug!(
            solver = self.name(),
            variables = problem.variables.len(),
            constraints = rows.len(),
            "handing problem to engine"
        );

        let mut vars = ProblemVariables::new();
        let xs: Vec<Variable> = problem
            .variables
            .iter()
            .map(|v| vars.add(definition(v)))
            .collect();

        let objective = to_expression(&problem.objective.expr, &xs);
        let unsolved = match problem.objective.sense {
            Sense::Minimize => vars.minimise(objective),
            Sense::Maximize => vars.maximise(objective),
        };

        let mut model = unsolved.using(good_lp::microlp);
        for row in rows {
            for c in to_constraints(row, &xs) {
                model = model.with(c);
            }
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = xs.iter().map(|x| solution.value(*x)).collect();
                let objective = problem.objective.expr.evaluate(&values);
                Outcome::Optimal(Assignment { values, objective })
            }
            Err(ResolutionError::Infeasible) => Outcome::Infeasible,
            Err(ResolutionError::Unbounded) => Outcome::Unbounded,
            Err(other) => Outcome::Error(other.to_string()),
        }
    }
}

fn definition(var: &DecisionVariable) -> VariableDefinition {
    let def = variable().name(var.name.clone());
    match var.domain {
        Domain::NonNegativeIntegers => def.integer().min(0),
        Domain::NonNegativeReals | Domain::PositiveReals => def.min(0),
    }
}

fn to_expression(expr: &LinearExpr, xs: &[Variable]) -> Expression {
    let linear: Expression = expr
        .terms()
        .iter()
        .map(|(var, coef)| *coef * xs[var.0])
        .sum();
    linear + expr.constant_term()
}

/// One engine constraint per finite side, or a single equality.
fn to_constraints(row: &LinearConstraint, xs: &[Variable]) -> Vec<Constraint> {
    let lhs = to_expression(&row.expr, xs);
    let (lower, upper) = (row.lower, row.upper);

    if row.is_equality() {
        return vec![constraint!(lhs == lower)];
    }

    let mut out = Vec::with_capacity(2);
    if row.has_lower() {
        let lhs = lhs.clone();
        out.push(constraint!(lhs >= lower));
    }
    if row.has_upper() {
        out.push(constraint!(lhs <= upper));
    }
    out
}
