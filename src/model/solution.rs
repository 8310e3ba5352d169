use serde::Serialize;

/// Servings chosen for one food.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodServing {
    pub food: String,
    pub servings: u64,
    pub cost: f64,
    pub volume: f64,
}

/// Total intake of one nutrient against its bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientTotal {
    pub nutrient: String,
    pub amount: f64,
    pub min: f64,
    /// `+inf` when unbounded; serialized as `null`.
    pub max: f64,
}

impl NutrientTotal {
    pub fn is_at_bound(&self, tol: f64) -> bool {
        (self.amount - self.min).abs() <= tol || (self.amount - self.max).abs() <= tol
    }
}

/// An optimal diet: integer servings per food and the totals they imply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietSolution {
    pub servings: Vec<FoodServing>,
    pub nutrients: Vec<NutrientTotal>,
    pub total_cost: f64,
    pub total_volume: f64,
    pub max_volume: f64,
}

impl DietSolution {
    pub fn servings_of(&self, food: &str) -> Option<u64> {
        self.servings
            .iter()
            .find(|s| s.food == food)
            .map(|s| s.servings)
    }

    /// Foods with at least one serving.
    pub fn chosen(&self) -> impl Iterator<Item = &FoodServing> {
        self.servings.iter().filter(|s| s.servings > 0)
    }

    pub fn total_servings(&self) -> u64 {
        self.servings.iter().map(|s| s.servings).sum()
    }

    pub fn volume_slack(&self) -> f64 {
        self.max_volume - self.total_volume
    }
}
