use std::path::Path;

use crate::error::Result;
use crate::model::DietSolution;
use crate::solver::{Outcome, SolveStatus};

/// Write the serving plan as CSV: one row per food, including zero rows.
pub fn write_solution_csv(solution: &DietSolution, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["food", "servings", "cost", "volume"])?;
    for s in &solution.servings {
        wtr.write_record([
            s.food.clone(),
            s.servings.to_string(),
            format!("{:.4}", s.cost),
            format!("{:.4}", s.volume),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// JSON report for any outcome; `solution` is `null` unless optimal.
pub fn outcome_json(outcome: &Outcome<DietSolution>) -> serde_json::Value {
    let status: SolveStatus = outcome.status();
    let message = match outcome {
        Outcome::Error(msg) => Some(msg.clone()),
        _ => None,
    };
    serde_json::json!({
        "status": status,
        "message": message,
        "solution": outcome.optimal(),
    })
}
