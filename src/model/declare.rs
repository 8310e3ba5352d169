//! Abstract structure of the diet model: sets, parameters and decision
//! variables, declared without any data.

use std::fmt;

use serde::Serialize;

/// Value domain of a parameter or variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Domain {
    PositiveReals,
    NonNegativeReals,
    NonNegativeIntegers,
}

impl Domain {
    /// Membership test. NaN is never a member.
    pub fn contains(self, value: f64) -> bool {
        match self {
            Domain::PositiveReals => value > 0.0,
            Domain::NonNegativeReals => value >= 0.0,
            Domain::NonNegativeIntegers => value >= 0.0 && value.fract() == 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::PositiveReals => "PositiveReals",
            Domain::NonNegativeReals => "NonNegativeReals",
            Domain::NonNegativeIntegers => "NonNegativeIntegers",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a parameter or variable is indexed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Index {
    Scalar,
    Foods,
    Nutrients,
    FoodsByNutrients,
}

impl Index {
    pub fn as_str(self) -> &'static str {
        match self {
            Index::Scalar => "",
            Index::Foods => "[F]",
            Index::Nutrients => "[N]",
            Index::FoodsByNutrients => "[F,N]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetDecl {
    pub name: &'static str,
    pub doc: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDecl {
    pub name: &'static str,
    pub index: Index,
    pub domain: Domain,
    pub default: Option<f64>,
    pub doc: &'static str,
}

impl ParamDecl {
    /// A value is accepted if it lies in the domain and is finite, or if it
    /// is exactly the declared default (which covers `Nmax = +inf`).
    pub fn accepts(&self, value: f64) -> bool {
        if self.default == Some(value) {
            return true;
        }
        value.is_finite() && self.domain.contains(value)
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub name: &'static str,
    pub index: Index,
    pub domain: Domain,
    pub doc: &'static str,
}

pub const SET_FOODS: &str = "F";
pub const SET_NUTRIENTS: &str = "N";

pub const PARAM_COST: &str = "c";
pub const PARAM_CONTENT: &str = "a";
pub const PARAM_NUTRIENT_MIN: &str = "Nmin";
pub const PARAM_NUTRIENT_MAX: &str = "Nmax";
pub const PARAM_VOLUME: &str = "V";
pub const PARAM_MAX_VOLUME: &str = "Vmax";

pub const VAR_SERVINGS: &str = "x";

/// Food and nutrient sets. Identifiers are unique within each set; order
/// carries no meaning.
pub fn declare_sets() -> Vec<SetDecl> {
    vec![
        SetDecl {
            name: SET_FOODS,
            doc: "Foods",
        },
        SetDecl {
            name: SET_NUTRIENTS,
            doc: "Nutrients",
        },
    ]
}

pub fn declare_parameters() -> Vec<ParamDecl> {
    vec![
        ParamDecl {
            name: PARAM_COST,
            index: Index::Foods,
            domain: Domain::PositiveReals,
            default: None,
            doc: "Cost of one serving",
        },
        ParamDecl {
            name: PARAM_CONTENT,
            index: Index::FoodsByNutrients,
            domain: Domain::NonNegativeReals,
            default: Some(0.0),
            doc: "Amount of nutrient in one serving",
        },
        ParamDecl {
            name: PARAM_NUTRIENT_MIN,
            index: Index::Nutrients,
            domain: Domain::NonNegativeReals,
            default: Some(0.0),
            doc: "Lower bound on nutrient intake",
        },
        ParamDecl {
            name: PARAM_NUTRIENT_MAX,
            index: Index::Nutrients,
            domain: Domain::NonNegativeReals,
            default: Some(f64::INFINITY),
            doc: "Upper bound on nutrient intake",
        },
        ParamDecl {
            name: PARAM_VOLUME,
            index: Index::Foods,
            domain: Domain::PositiveReals,
            default: None,
            doc: "Volume of one serving",
        },
        ParamDecl {
            name: PARAM_MAX_VOLUME,
            index: Index::Scalar,
            domain: Domain::PositiveReals,
            default: None,
            doc: "Maximum total volume consumed",
        },
    ]
}

/// Servings of each food; the only unknowns of the model.
pub fn declare_decision_variables() -> Vec<VarDecl> {
    vec![VarDecl {
        name: VAR_SERVINGS,
        index: Index::Foods,
        domain: Domain::NonNegativeIntegers,
        doc: "Servings consumed",
    }]
}
