use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{DietError, Result};
use crate::model::declare::*;
use crate::model::instance::{DietInstance, IndexedSet};
use crate::models::DietData;

/// The declared, data-free structure of the diet model.
///
/// A template is immutable. Each call to [`instantiate`](Self::instantiate)
/// binds one [`DietData`] and returns a new, independent [`DietInstance`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelTemplate {
    sets: Vec<SetDecl>,
    params: Vec<ParamDecl>,
    variables: Vec<VarDecl>,
}

impl Default for ModelTemplate {
    fn default() -> Self {
        Self::declare()
    }
}

impl ModelTemplate {
    /// Declare sets, parameters and decision variables.
    pub fn declare() -> Self {
        let template = Self {
            sets: declare_sets(),
            params: declare_parameters(),
            variables: declare_decision_variables(),
        };
        debug!(
            sets = template.sets.len(),
            params = template.params.len(),
            variables = template.variables.len(),
            "declared diet model"
        );
        template
    }

    pub fn sets(&self) -> &[SetDecl] {
        &self.sets
    }

    pub fn params(&self) -> &[ParamDecl] {
        &self.params
    }

    pub fn variables(&self) -> &[VarDecl] {
        &self.variables
    }

    pub fn param(&self, name: &str) -> Result<&ParamDecl> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| DietError::InvalidInput(format!("parameter {} is not declared", name)))
    }

    pub fn variable(&self, name: &str) -> Result<&VarDecl> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| DietError::InvalidInput(format!("variable {} is not declared", name)))
    }

    /// Bind a data instance.
    ///
    /// Fails on the first duplicate identifier, unknown reference, value
    /// outside its declared domain, missing required value, or nutrient whose
    /// lower bound exceeds its upper bound.
    pub fn instantiate(&self, data: &DietData) -> Result<DietInstance> {
        let foods = IndexedSet::from_ids(SET_FOODS, data.foods.iter().map(|f| f.id.as_str()))?;
        let nutrients =
            IndexedSet::from_ids(SET_NUTRIENTS, data.nutrients.iter().map(|n| n.id.as_str()))?;

        let cost_decl = self.param(PARAM_COST)?;
        let volume_decl = self.param(PARAM_VOLUME)?;
        let mut cost = Vec::with_capacity(foods.len());
        let mut volume = Vec::with_capacity(foods.len());
        for food in &data.foods {
            let index = format!("[{}]", food.id);
            cost.push(bind(cost_decl, &index, Some(food.cost))?);
            volume.push(bind(volume_decl, &index, Some(food.volume))?);
            trace!(food = %food.debug_string(), "bound food");
        }

        let min_decl = self.param(PARAM_NUTRIENT_MIN)?;
        let max_decl = self.param(PARAM_NUTRIENT_MAX)?;
        let mut nutrient_min = Vec::with_capacity(nutrients.len());
        let mut nutrient_max = Vec::with_capacity(nutrients.len());
        for nutrient in &data.nutrients {
            let index = format!("[{}]", nutrient.id);
            let min = bind(min_decl, &index, nutrient.min)?;
            let max = bind(max_decl, &index, nutrient.max)?;
            if min > max {
                return Err(DietError::DomainViolation {
                    parameter: PARAM_NUTRIENT_MIN.to_string(),
                    index,
                    value: min.to_string(),
                    domain: format!("[0, {} = {}]", PARAM_NUTRIENT_MAX, max),
                });
            }
            nutrient_min.push(min);
            nutrient_max.push(max);
        }

        let content_decl = self.param(PARAM_CONTENT)?;
        let content_default = bind(content_decl, "", None)?;
        let mut content = vec![vec![content_default; foods.len()]; nutrients.len()];
        let mut seen = HashSet::new();
        for row in &data.contents {
            let f = foods.resolve("food", &row.food)?;
            let n = nutrients.resolve("nutrient", &row.nutrient)?;
            let index = format!("[{},{}]", row.food, row.nutrient);
            if !seen.insert((f, n)) {
                return Err(DietError::DuplicateIdentifier {
                    set: "F x N",
                    id: index,
                });
            }
            content[n][f] = bind(content_decl, &index, Some(row.amount))?;
        }

        let max_volume = bind(self.param(PARAM_MAX_VOLUME)?, "", data.max_volume)?;

        debug!(
            foods = foods.len(),
            nutrients = nutrients.len(),
            contents = data.contents.len(),
            max_volume,
            "instantiated diet model"
        );

        Ok(DietInstance {
            foods,
            nutrients,
            servings: self.variable(VAR_SERVINGS)?.clone(),
            cost,
            volume,
            content,
            nutrient_min,
            nutrient_max,
            max_volume,
        })
    }
}

/// Resolve one parameter value against its declaration.
fn bind(decl: &ParamDecl, index: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if decl.accepts(v) => Ok(v),
        Some(v) => Err(DietError::domain(decl.name, index, v, decl.domain.as_str())),
        None => decl
            .default
            .ok_or_else(|| DietError::missing(decl.name, index, decl.domain.as_str())),
    }
}
