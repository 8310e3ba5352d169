use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Domain violation: {parameter}{index} = {value} is not in {domain}")]
    DomainViolation {
        parameter: String,
        index: String,
        value: String,
        domain: String,
    },

    #[error("Unknown {kind} '{id}' referenced{}", suggestion_suffix(.suggestion))]
    ReferentialViolation {
        kind: &'static str,
        id: String,
        suggestion: Option<String>,
    },

    #[error("Duplicate identifier in set {set}: {id}")]
    DuplicateIdentifier { set: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

impl DietError {
    /// Domain violation for a value that was supplied but rejected.
    pub fn domain(parameter: &str, index: &str, value: f64, domain: &str) -> Self {
        DietError::DomainViolation {
            parameter: parameter.to_string(),
            index: index.to_string(),
            value: value.to_string(),
            domain: domain.to_string(),
        }
    }

    /// Domain violation for a required value that was never supplied.
    pub fn missing(parameter: &str, index: &str, domain: &str) -> Self {
        DietError::DomainViolation {
            parameter: parameter.to_string(),
            index: index.to_string(),
            value: "<missing>".to_string(),
            domain: domain.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
