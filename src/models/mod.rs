pub mod data;
pub mod food;
pub mod nutrient;

pub use data::DietData;
pub use food::Food;
pub use nutrient::{Nutrient, NutrientContent};
