//! The diet model.
//!
//! Two states: a [`ModelTemplate`] holds the declared structure with no data
//! (`Declared`); [`ModelTemplate::instantiate`] binds a
//! [`DietData`](crate::models::DietData) and yields a [`DietInstance`]
//! (`Instantiated`) that emits the objective and constraints for a solver.

pub mod constants;
pub mod declare;
pub mod expr;
pub mod instance;
pub mod solution;
pub mod template;

pub use declare::{
    declare_decision_variables, declare_parameters, declare_sets, Domain, Index, ParamDecl,
    SetDecl, VarDecl,
};
pub use expr::{
    DecisionVariable, LinearConstraint, LinearExpr, LinearProblem, Objective, Sense, VarId,
};
pub use instance::{DietInstance, IndexedSet};
pub use solution::{DietSolution, FoodServing, NutrientTotal};
pub use template::ModelTemplate;
