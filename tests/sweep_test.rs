#[macro_use]
extern crate assert_float_eq;

use tempfile::tempdir;

use diet_model_rs::model::ModelTemplate;
use diet_model_rs::models::{DietData, Food, Nutrient, NutrientContent};
use diet_model_rs::solver::{MicroLpSolver, SolveStatus};
use diet_model_rs::sweep::{cheapest, run_sweep, write_best_json, write_csv, SweepConfig};

fn two_foods() -> DietData {
    DietData {
        foods: vec![Food::new("F1", 2.0, 1.0), Food::new("F2", 3.0, 2.0)],
        nutrients: vec![Nutrient::new("N1", Some(10.0), None)],
        contents: vec![
            NutrientContent::new("F1", "N1", 2.0),
            NutrientContent::new("F2", "N1", 5.0),
        ],
        max_volume: Some(10.0),
    }
}

#[test]
fn test_sweep_over_volume_caps() {
    let config = SweepConfig::from_list("3,4,10");
    let steps = run_sweep(&ModelTemplate::declare(), &two_foods(), &MicroLpSolver, &config).unwrap();

    assert_eq!(steps.len(), 3);
    // Volume 3 cannot hold 10 units of N1.
    assert_eq!(steps[0].status, SolveStatus::Infeasible);
    assert_eq!(steps[0].total_cost, None);

    assert_eq!(steps[1].status, SolveStatus::Optimal);
    assert_float_absolute_eq!(steps[1].total_cost.unwrap(), 6.0, 1e-9);
    assert_float_absolute_eq!(steps[1].total_volume.unwrap(), 4.0, 1e-9);
    assert_eq!(steps[1].total_servings, Some(2));

    assert_float_absolute_eq!(steps[2].total_cost.unwrap(), 6.0, 1e-9);

    assert_eq!(cheapest(&steps).map(|s| s.max_volume), Some(4.0));
}

#[test]
fn test_sweep_leaves_input_untouched() {
    let data = two_foods();
    let config = SweepConfig::range(4.0, 8.0, 2.0).unwrap();
    run_sweep(&ModelTemplate::declare(), &data, &MicroLpSolver, &config).unwrap();
    assert_eq!(data, two_foods());
}

#[test]
fn test_sweep_outputs_written() {
    let config = SweepConfig::from_list("3,10");
    let steps = run_sweep(&ModelTemplate::declare(), &two_foods(), &MicroLpSolver, &config).unwrap();

    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("steps.csv");
    let json_path = dir.path().join("best.json");
    write_csv(&steps, &csv_path).unwrap();
    write_best_json(cheapest(&steps), &steps, &json_path).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().nth(1).unwrap().contains("infeasible"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["best"]["max_volume"], 10.0);
}
