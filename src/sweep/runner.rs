use serde::Serialize;
use tracing::info;

use crate::error::{DietError, Result};
use crate::model::ModelTemplate;
use crate::models::DietData;
use crate::solver::{Outcome, SolveStatus, Solver};

/// Volume caps to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub volumes: Vec<f64>,
}

impl SweepConfig {
    /// Evenly spaced caps from `start` to `stop` inclusive.
    pub fn range(start: f64, stop: f64, step: f64) -> Result<Self> {
        if step.is_nan() || step <= 0.0 || !start.is_finite() || !stop.is_finite() || stop < start {
            return Err(DietError::InvalidInput(format!(
                "invalid sweep range {}..={} step {}",
                start, stop, step
            )));
        }
        let count = ((stop - start) / step + 1e-9).floor() as usize + 1;
        let volumes = (0..count).map(|i| start + step * i as f64).collect();
        Ok(Self { volumes })
    }

    /// Parse a comma-separated list of caps, skipping unparsable entries.
    pub fn from_list(s: &str) -> Self {
        let volumes = s
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect();
        Self { volumes }
    }
}

/// Outcome of one volume cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepStep {
    pub max_volume: f64,
    pub status: SolveStatus,
    pub total_cost: Option<f64>,
    pub total_volume: Option<f64>,
    pub total_servings: Option<u64>,
}

/// Solve one fresh instance per volume cap.
///
/// Every step binds its own copy of the data to the same template; nothing
/// carries over between steps.
pub fn run_sweep<S: Solver>(
    template: &ModelTemplate,
    data: &DietData,
    solver: &S,
    config: &SweepConfig,
) -> Result<Vec<SweepStep>> {
    let mut steps = Vec::with_capacity(config.volumes.len());

    for &max_volume in &config.volumes {
        let instance = template.instantiate(&data.with_max_volume(max_volume))?;
        let outcome = instance.solve(solver);

        let step = match &outcome {
            Outcome::Optimal(solution) => SweepStep {
                max_volume,
                status: outcome.status(),
                total_cost: Some(solution.total_cost),
                total_volume: Some(solution.total_volume),
                total_servings: Some(solution.total_servings()),
            },
            _ => SweepStep {
                max_volume,
                status: outcome.status(),
                total_cost: None,
                total_volume: None,
                total_servings: None,
            },
        };

        info!(max_volume, status = %step.status, cost = ?step.total_cost, "sweep step");
        steps.push(step);
    }

    Ok(steps)
}

/// Cheapest optimal step; the smallest cap wins ties.
pub fn cheapest(steps: &[SweepStep]) -> Option<&SweepStep> {
    steps
        .iter()
        .filter_map(|s| s.total_cost.map(|c| (s, c)))
        .min_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    a.0.max_volume
                        .partial_cmp(&b.0.max_volume)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        })
        .map(|(s, _)| s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive() {
        let config = SweepConfig::range(2.0, 10.0, 2.0).unwrap();
        assert_eq!(config.volumes, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_range_rejects_bad_step() {
        assert!(SweepConfig::range(1.0, 5.0, 0.0).is_err());
        assert!(SweepConfig::range(5.0, 1.0, 1.0).is_err());
        assert!(SweepConfig::range(1.0, 5.0, f64::NAN).is_err());
    }

    #[test]
    fn test_from_list_skips_garbage() {
        let config = SweepConfig::from_list("10, x, 20,30.5");
        assert_eq!(config.volumes, vec![10.0, 20.0, 30.5]);
    }

    fn step(max_volume: f64, cost: Option<f64>) -> SweepStep {
        SweepStep {
            max_volume,
            status: if cost.is_some() {
                SolveStatus::Optimal
            } else {
                SolveStatus::Infeasible
            },
            total_cost: cost,
            total_volume: None,
            total_servings: None,
        }
    }

    #[test]
    fn test_cheapest_prefers_smaller_cap_on_tie() {
        let steps = vec![step(3.0, None), step(8.0, Some(6.0)), step(4.0, Some(6.0))];
        assert_eq!(cheapest(&steps).map(|s| s.max_volume), Some(4.0));
        assert!(cheapest(&[step(1.0, None)]).is_none());
    }
}
