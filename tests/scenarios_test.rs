#[macro_use]
extern crate assert_float_eq;

use diet_model_rs::logging;
use diet_model_rs::model::{DietSolution, ModelTemplate};
use diet_model_rs::models::{DietData, Food, Nutrient, NutrientContent};
use diet_model_rs::solver::{MicroLpSolver, Outcome};

/// F1 (cost 2, volume 1), F2 (cost 3, volume `f2_volume`); N1 with F1 → 2,
/// F2 → 5 and bounds [10, inf).
fn two_foods(f2_volume: f64, max_volume: f64) -> DietData {
    DietData {
        foods: vec![Food::new("F1", 2.0, 1.0), Food::new("F2", 3.0, f2_volume)],
        nutrients: vec![Nutrient::new("N1", Some(10.0), None)],
        contents: vec![
            NutrientContent::new("F1", "N1", 2.0),
            NutrientContent::new("F2", "N1", 5.0),
        ],
        max_volume: Some(max_volume),
    }
}

fn solve(data: &DietData) -> Outcome<DietSolution> {
    logging::init_test();
    ModelTemplate::declare()
        .instantiate(data)
        .unwrap()
        .solve(&MicroLpSolver)
}

fn assert_feasible(data: &DietData, solution: &DietSolution) {
    let instance = ModelTemplate::declare().instantiate(data).unwrap();
    let values: Vec<f64> = solution.servings.iter().map(|s| s.servings as f64).collect();
    let violated = instance.problem().violated_constraints(&values, 1e-9).len();
    assert_eq!(violated, 0, "solution violates constraints: {:?}", solution);
    assert!(solution.total_volume <= data.max_volume.unwrap() + 1e-9);
}

#[test]
fn test_cheapest_plan_uses_denser_food() {
    let data = two_foods(2.0, 10.0);
    let solution = solve(&data).into_optimal().expect("optimal");

    // Two servings of F2 (cost 6) beat five of F1 (cost 10).
    assert_float_absolute_eq!(solution.total_cost, 6.0, 1e-9);
    assert_eq!(solution.servings_of("F1"), Some(0));
    assert_eq!(solution.servings_of("F2"), Some(2));
    assert_feasible(&data, &solution);
}

#[test]
fn test_feasible_alternative_is_not_cheaper() {
    let data = two_foods(2.0, 10.0);
    let instance = ModelTemplate::declare().instantiate(&data).unwrap();
    let problem = instance.problem();
    assert!(problem.violated_constraints(&[5.0, 0.0], 1e-9).is_empty());

    let optimal = solve(&data).into_optimal().expect("optimal");
    assert!(optimal.total_cost <= instance.solution_for(&[5, 0]).total_cost);
}

#[test]
fn test_tighter_volume_cap_is_respected() {
    let loose = solve(&two_foods(2.0, 10.0)).into_optimal().expect("optimal");
    let data = two_foods(2.0, 4.0);
    let tight = solve(&data).into_optimal().expect("optimal");

    assert!(tight.total_cost >= loose.total_cost);
    assert!(tight.total_volume <= 4.0 + 1e-9);
    assert_feasible(&data, &tight);
}

#[test]
fn test_tighter_volume_cap_raises_cost() {
    // With F2 at volume 3 the cheap plan (two F2) needs volume 6.
    let loose = solve(&two_foods(3.0, 10.0)).into_optimal().expect("optimal");
    let data = two_foods(3.0, 5.0);
    let tight = solve(&data).into_optimal().expect("optimal");

    assert_float_absolute_eq!(loose.total_cost, 6.0, 1e-9);
    assert_float_absolute_eq!(tight.total_cost, 10.0, 1e-9);
    assert!(tight.total_cost > loose.total_cost);
    assert_eq!(tight.servings_of("F1"), Some(5));
    assert_float_absolute_eq!(tight.volume_slack(), 0.0, 1e-9);
    assert_feasible(&data, &tight);
}

fn equality_data(content: f64) -> DietData {
    DietData {
        foods: vec![Food::new("F1", 2.0, 1.0)],
        nutrients: vec![Nutrient::new("N1", Some(10.0), Some(10.0))],
        contents: vec![NutrientContent::new("F1", "N1", content)],
        max_volume: Some(10.0),
    }
}

#[test]
fn test_equal_bounds_force_exact_servings() {
    let data = equality_data(2.0);
    let instance = ModelTemplate::declare().instantiate(&data).unwrap();
    assert!(instance.build_nutrient_constraints()[0].is_equality());

    let solution = instance.solve(&MicroLpSolver).into_optimal().expect("optimal");
    assert_eq!(solution.servings_of("F1"), Some(5));
    assert_float_absolute_eq!(solution.nutrients[0].amount, 10.0, 1e-9);
    assert_float_absolute_eq!(solution.total_cost, 10.0, 1e-9);
}

#[test]
fn test_equal_bounds_without_integer_multiple_is_infeasible() {
    // 3·x = 10 has no integer solution.
    assert!(solve(&equality_data(3.0)).is_infeasible());
}

#[test]
fn test_zero_content_with_positive_min_is_infeasible() {
    let mut data = two_foods(2.0, 10.0);
    for row in &mut data.contents {
        row.amount = 0.0;
    }
    let outcome = solve(&data);
    assert!(outcome.is_infeasible());
    assert!(outcome.optimal().is_none());
}

#[test]
fn test_nutrient_without_contents_and_positive_min_is_infeasible() {
    let mut data = two_foods(2.0, 10.0);
    data.nutrients.push(Nutrient::new("N2", Some(1.0), None));
    assert_eq!(solve(&data), Outcome::Infeasible);
}

#[test]
fn test_nutrient_without_contents_and_zero_min_is_harmless() {
    let mut data = two_foods(2.0, 10.0);
    data.nutrients.push(Nutrient::unbounded("N2"));
    let solution = solve(&data).into_optimal().expect("optimal");
    assert_float_absolute_eq!(solution.total_cost, 6.0, 1e-9);
    assert_eq!(solution.nutrients[1].amount, 0.0);
}

#[test]
fn test_upper_bound_limits_servings() {
    // N1 in [10, 12]: two F2 give 10, within range.
    let mut data = two_foods(2.0, 10.0);
    data.nutrients[0].max = Some(12.0);
    let solution = solve(&data).into_optimal().expect("optimal");
    assert!(solution.nutrients[0].amount <= 12.0 + 1e-9);
    assert_feasible(&data, &solution);
}

#[test]
fn test_no_nutrients_buys_nothing() {
    let mut data = two_foods(2.0, 10.0);
    data.nutrients.clear();
    data.contents.clear();
    let solution = solve(&data).into_optimal().expect("optimal");
    assert_eq!(solution.total_servings(), 0);
    assert_eq!(solution.total_cost, 0.0);
}

#[test]
fn test_no_foods_gives_empty_plan_at_zero_cost() {
    let data = DietData {
        max_volume: Some(10.0),
        ..Default::default()
    };
    let solution = solve(&data).into_optimal().expect("optimal");
    assert!(solution.servings.is_empty());
    assert!(solution.total_cost.is_sign_positive());
    assert_eq!(format!("{:.2}", solution.total_cost), "0.00");
}
