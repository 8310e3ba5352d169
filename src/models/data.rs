use serde::{Deserialize, Serialize};

use crate::models::{Food, Nutrient, NutrientContent};

/// One concrete data instance for the diet model.
///
/// This is the whole data contract: food and nutrient records, the content
/// table and the volume cap. Nothing here is validated; binding it to a
/// [`ModelTemplate`](crate::model::ModelTemplate) does that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietData {
    #[serde(default)]
    pub foods: Vec<Food>,

    #[serde(default)]
    pub nutrients: Vec<Nutrient>,

    #[serde(default)]
    pub contents: Vec<NutrientContent>,

    #[serde(default, alias = "Vmax", skip_serializing_if = "Option::is_none")]
    pub max_volume: Option<f64>,
}

impl DietData {
    /// Copy of this data with the volume cap replaced.
    pub fn with_max_volume(&self, max_volume: f64) -> Self {
        Self {
            max_volume: Some(max_volume),
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.nutrients.is_empty() && self.contents.is_empty()
    }
}
