use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::{debug, info, warn};

use crate::error::{DietError, Result};
use crate::model::constants::*;
use crate::model::declare::VarDecl;
use crate::model::expr::{
    DecisionVariable, LinearConstraint, LinearExpr, LinearProblem, Objective, Sense, VarId,
};
use crate::model::solution::{DietSolution, FoodServing, NutrientTotal};
use crate::solver::{Assignment, Outcome, Solver};

/// Bound identifiers of one set, kept in data order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedSet {
    name: &'static str,
    ids: Vec<String>,
    positions: HashMap<String, usize>,
}

impl IndexedSet {
    /// Bind identifiers, rejecting duplicates.
    pub fn from_ids<'a>(name: &'static str, ids: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut set = Self {
            name,
            ids: Vec::new(),
            positions: HashMap::new(),
        };
        for id in ids {
            if set.positions.contains_key(id) {
                return Err(DietError::DuplicateIdentifier {
                    set: name,
                    id: id.to_string(),
                });
            }
            set.positions.insert(id.to_string(), set.ids.len());
            set.ids.push(id.to_string());
        }
        Ok(set)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Closest declared identifier to an unknown one, if any is close enough.
    pub fn suggest(&self, id: &str) -> Option<String> {
        let needle = id.to_lowercase();
        let mut candidates: Vec<(&String, f64)> = self
            .ids
            .iter()
            .map(|known| (known, jaro_winkler(&known.to_lowercase(), &needle)))
            .filter(|(_, score)| *score >= SUGGESTION_MIN_SIMILARITY)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.first().map(|(known, _)| (*known).clone())
    }

    /// Position of `id`, or a referential violation naming the closest match.
    pub fn resolve(&self, kind: &'static str, id: &str) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| DietError::ReferentialViolation {
                kind,
                id: id.to_string(),
                suggestion: self.suggest(id),
            })
    }
}

/// The diet model bound to one data instance, ready to solve.
///
/// Created only by [`ModelTemplate::instantiate`](crate::model::ModelTemplate::instantiate);
/// every parameter has already passed its domain check. Nothing here is
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DietInstance {
    pub(crate) foods: IndexedSet,
    pub(crate) nutrients: IndexedSet,
    pub(crate) servings: VarDecl,
    pub(crate) cost: Vec<f64>,
    pub(crate) volume: Vec<f64>,
    /// Row per nutrient, column per food.
    pub(crate) content: Vec<Vec<f64>>,
    pub(crate) nutrient_min: Vec<f64>,
    pub(crate) nutrient_max: Vec<f64>,
    pub(crate) max_volume: f64,
}

impl DietInstance {
    pub fn foods(&self) -> &IndexedSet {
        &self.foods
    }

    pub fn nutrients(&self) -> &IndexedSet {
        &self.nutrients
    }

    pub fn cost(&self, food: usize) -> f64 {
        self.cost[food]
    }

    pub fn volume(&self, food: usize) -> f64 {
        self.volume[food]
    }

    pub fn content(&self, food: usize, nutrient: usize) -> f64 {
        self.content[nutrient][food]
    }

    pub fn nutrient_bounds(&self, nutrient: usize) -> (f64, f64) {
        (self.nutrient_min[nutrient], self.nutrient_max[nutrient])
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// One servings variable per food, in food order.
    pub fn decision_variables(&self) -> Vec<DecisionVariable> {
        self.foods
            .ids()
            .iter()
            .map(|id| DecisionVariable {
                name: id.clone(),
                domain: self.servings.domain,
            })
            .collect()
    }

    /// `minimize Σ c[f]·x[f]`
    pub fn build_objective(&self) -> Objective {
        let mut expr = LinearExpr::new();
        for (f, c) in self.cost.iter().enumerate() {
            expr.add_term(VarId(f), *c);
        }
        Objective {
            name: OBJECTIVE_NAME.to_string(),
            sense: Sense::Minimize,
            expr,
        }
    }

    /// `Nmin[n] ≤ Σ a[f,n]·x[f] ≤ Nmax[n]` for every nutrient.
    ///
    /// A nutrient no food supplies keeps an expression with no terms; it is
    /// emitted as is so the solver reports it if `Nmin[n] > 0`.
    pub fn build_nutrient_constraints(&self) -> Vec<LinearConstraint> {
        self.nutrients
            .ids()
            .iter()
            .enumerate()
            .map(|(n, id)| {
                let mut expr = LinearExpr::new();
                for (f, amount) in self.content[n].iter().enumerate() {
                    expr.add_term(VarId(f), *amount);
                }
                LinearConstraint::ranged(
                    format!("{}[{}]", NUTRIENT_CONSTRAINT_PREFIX, id),
                    self.nutrient_min[n],
                    expr,
                    self.nutrient_max[n],
                )
            })
            .collect()
    }

    /// `Σ V[f]·x[f] ≤ Vmax`
    pub fn build_volume_constraint(&self) -> LinearConstraint {
        let mut expr = LinearExpr::new();
        for (f, v) in self.volume.iter().enumerate() {
            expr.add_term(VarId(f), *v);
        }
        LinearConstraint::at_most(VOLUME_CONSTRAINT_NAME, expr, self.max_volume)
    }

    /// The complete problem: variables, objective, nutrient constraints and
    /// the volume constraint, in that order.
    pub fn problem(&self) -> LinearProblem {
        let mut constraints = self.build_nutrient_constraints();
        constraints.push(self.build_volume_constraint());

        debug!(
            variables = self.foods.len(),
            constraints = constraints.len(),
            "assembled diet problem"
        );

        LinearProblem {
            variables: self.decision_variables(),
            objective: self.build_objective(),
            constraints,
        }
    }

    /// Solve with `solver` and translate its assignment into servings.
    pub fn solve<S: Solver>(&self, solver: &S) -> Outcome<DietSolution> {
        let problem = self.problem();
        let outcome = solver.solve(&problem);
        info!(solver = solver.name(), status = %outcome.status(), "solve finished");
        outcome.and_then(|assignment| self.interpret(&problem, assignment))
    }

    /// Reject assignments outside the servings domain, then re-check every
    /// constraint on the rounded counts.
    fn interpret(&self, problem: &LinearProblem, assignment: Assignment) -> Outcome<DietSolution> {
        if assignment.values.len() != self.foods.len() {
            return Outcome::Error(format!(
                "solver returned {} values for {} foods",
                assignment.values.len(),
                self.foods.len()
            ));
        }

        let mut counts = Vec::with_capacity(self.foods.len());
        for (id, value) in self.foods.ids().iter().zip(&assignment.values) {
            match to_servings(*value) {
                Some(count) => counts.push(count),
                None => {
                    warn!(food = %id, value, "solver value outside servings domain");
                    return Outcome::Error(format!(
                        "{}[{}] = {} is not in {}",
                        self.servings.name, id, value, self.servings.domain
                    ));
                }
            }
        }

        let values: Vec<f64> = counts.iter().map(|c| *c as f64).collect();
        let violated = problem.violated_constraints(&values, FEASIBILITY_TOLERANCE);
        if !violated.is_empty() {
            warn!(constraints = ?violated, "solver assignment violates constraints");
            return Outcome::Error(format!(
                "solver assignment violates {}",
                violated.join(", ")
            ));
        }

        Outcome::Optimal(self.solution_for(&counts))
    }

    /// Summarize a servings vector (one count per food).
    pub fn solution_for(&self, counts: &[u64]) -> DietSolution {
        let servings: Vec<FoodServing> = self
            .foods
            .ids()
            .iter()
            .enumerate()
            .map(|(f, id)| {
                let count = counts.get(f).copied().unwrap_or(0);
                FoodServing {
                    food: id.clone(),
                    servings: count,
                    cost: self.cost[f] * count as f64,
                    volume: self.volume[f] * count as f64,
                }
            })
            .collect();

        let nutrients = self
            .nutrients
            .ids()
            .iter()
            .enumerate()
            .map(|(n, id)| NutrientTotal {
                nutrient: id.clone(),
                amount: servings
                    .iter()
                    .enumerate()
                    .fold(0.0, |acc, (f, s)| acc + self.content[n][f] * s.servings as f64),
                min: self.nutrient_min[n],
                max: self.nutrient_max[n],
            })
            .collect();

        DietSolution {
            total_cost: servings.iter().fold(0.0, |acc, s| acc + s.cost),
            total_volume: servings.iter().fold(0.0, |acc, s| acc + s.volume),
            max_volume: self.max_volume,
            servings,
            nutrients,
        }
    }
}

/// Round a solver value to a serving count; `None` unless it is a
/// non-negative integer within tolerance.
fn to_servings(value: f64) -> Option<u64> {
    if !value.is_finite() || value < -INTEGRALITY_TOLERANCE {
        return None;
    }
    let rounded = value.round().max(0.0);
    if (value - rounded).abs() > INTEGRALITY_TOLERANCE {
        return None;
    }
    Some(rounded as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_set_rejects_duplicates() {
        let err = IndexedSet::from_ids("F", ["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, DietError::DuplicateIdentifier { set: "F", .. }));
    }

    #[test]
    fn test_indexed_set_keeps_order() {
        let set = IndexedSet::from_ids("N", ["Cal", "Iron", "VitC"]).unwrap();
        assert_eq!(set.ids(), &["Cal", "Iron", "VitC"]);
        assert_eq!(set.position("Iron"), Some(1));
        assert_eq!(set.position("iron"), None);
    }

    #[test]
    fn test_suggest_closest() {
        let set = IndexedSet::from_ids("F", ["Fries", "Hamburger", "Cheeseburger"]).unwrap();
        assert_eq!(set.suggest("Frys").as_deref(), Some("Fries"));
        assert_eq!(set.suggest("Orange Juice"), None);
    }

    #[test]
    fn test_to_servings() {
        assert_eq!(to_servings(4.9999999), Some(5));
        assert_eq!(to_servings(-1e-9), Some(0));
        assert_eq!(to_servings(2.5), None);
        assert_eq!(to_servings(-1.0), None);
        assert_eq!(to_servings(f64::NAN), None);
    }

    struct FixedSolver(Outcome<Assignment>);

    impl Solver for FixedSolver {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn solve(&self, _problem: &LinearProblem) -> Outcome<Assignment> {
            self.0.clone()
        }
    }

    fn instance() -> DietInstance {
        use crate::model::ModelTemplate;
        use crate::models::{DietData, Food, Nutrient, NutrientContent};

        let data = DietData {
            foods: vec![Food::new("F1", 2.0, 1.0), Food::new("F2", 3.0, 2.0)],
            nutrients: vec![Nutrient::new("N1", Some(10.0), None)],
            contents: vec![
                NutrientContent::new("F1", "N1", 2.0),
                NutrientContent::new("F2", "N1", 5.0),
            ],
            max_volume: Some(10.0),
        };
        ModelTemplate::declare().instantiate(&data).unwrap()
    }

    #[test]
    fn test_fractional_assignment_rejected() {
        let solver = FixedSolver(Outcome::Optimal(Assignment {
            values: vec![2.5, 1.0],
            objective: 8.0,
        }));
        let outcome = instance().solve(&solver);
        assert!(matches!(outcome, Outcome::Error(ref msg) if msg.contains("x[F1]")));
    }

    #[test]
    fn test_infeasible_assignment_rejected() {
        let solver = FixedSolver(Outcome::Optimal(Assignment {
            values: vec![0.0, 0.0],
            objective: 0.0,
        }));
        let outcome = instance().solve(&solver);
        assert!(matches!(outcome, Outcome::Error(ref msg) if msg.contains("nutrient_limit[N1]")));
    }

    #[test]
    fn test_solver_status_passed_through() {
        assert_eq!(
            instance().solve(&FixedSolver(Outcome::Unbounded)),
            Outcome::Unbounded
        );
        assert_eq!(
            instance().solve(&FixedSolver(Outcome::Infeasible)),
            Outcome::Infeasible
        );
    }

    #[test]
    fn test_empty_plan_totals_are_positive_zero() {
        use crate::model::ModelTemplate;
        use crate::models::{DietData, Nutrient};

        let data = DietData {
            nutrients: vec![Nutrient::unbounded("N1")],
            max_volume: Some(10.0),
            ..Default::default()
        };
        let empty = ModelTemplate::declare().instantiate(&data).unwrap();
        let solution = empty.solution_for(&[]);
        assert!(solution.total_cost.is_sign_positive());
        assert!(solution.total_volume.is_sign_positive());
        assert_eq!(format!("{:.2}", solution.total_cost), "0.00");
        assert!(solution.nutrients[0].amount.is_sign_positive());
    }

    #[test]
    fn test_solution_for_totals() {
        let solution = instance().solution_for(&[5, 0]);
        assert_eq!(solution.total_cost, 10.0);
        assert_eq!(solution.total_volume, 5.0);
        assert_eq!(solution.nutrients[0].amount, 10.0);
        assert_eq!(solution.servings_of("F1"), Some(5));
    }
}
