pub mod cli;
pub mod data;
pub mod error;
pub mod interface;
pub mod logging;
pub mod model;
pub mod models;
pub mod solver;
pub mod sweep;

pub use error::{DietError, Result};
pub use model::{DietInstance, DietSolution, ModelTemplate};
pub use models::{DietData, Food, Nutrient, NutrientContent};
pub use solver::{MicroLpSolver, Outcome, SolveStatus, Solver};
