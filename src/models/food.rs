use serde::{Deserialize, Serialize};

/// A purchasable food item.
///
/// `cost` is the price of one serving and `volume` the space one serving
/// takes up. Both must be strictly positive; that is checked when the data is
/// bound to a model, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(alias = "name", alias = "Name")]
    pub id: String,

    #[serde(alias = "Cost")]
    pub cost: f64,

    #[serde(alias = "Volume")]
    pub volume: f64,
}

impl Food {
    pub fn new(id: impl Into<String>, cost: f64, volume: f64) -> Self {
        Self {
            id: id.into(),
            cost,
            volume,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{}: cost {} vol {}", self.id, self.cost, self.volume)
    }
}
