use serde::{Deserialize, Serialize};

/// A tracked nutrient with an optional intake range.
///
/// A missing `min` means 0 and a missing `max` means unbounded. Those
/// defaults come from the parameter declarations when the data is bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(alias = "name", alias = "Name")]
    pub id: String,

    #[serde(default, alias = "Min", skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, alias = "Max", skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Nutrient {
    pub fn new(id: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            id: id.into(),
            min,
            max,
        }
    }

    /// Nutrient with both bounds left to their defaults.
    pub fn unbounded(id: impl Into<String>) -> Self {
        Self::new(id, None, None)
    }
}

/// Amount of one nutrient supplied by one serving of one food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientContent {
    #[serde(alias = "Food")]
    pub food: String,

    #[serde(alias = "Nutrient")]
    pub nutrient: String,

    #[serde(alias = "Amount")]
    pub amount: f64,
}

impl NutrientContent {
    pub fn new(food: impl Into<String>, nutrient: impl Into<String>, amount: f64) -> Self {
        Self {
            food: food.into(),
            nutrient: nutrient.into(),
            amount,
        }
    }
}
