use crate::model::constants::FEASIBILITY_TOLERANCE;
use crate::model::{DietInstance, DietSolution, ModelTemplate};
use crate::solver::Outcome;

fn format_bound(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{}", value)
    }
}

/// Display a solved diet in a formatted table.
pub fn display_solution(solution: &DietSolution) {
    println!();
    println!("=== Diet Plan ===");
    println!();

    let chosen: Vec<_> = solution.chosen().collect();
    if chosen.is_empty() {
        println!("No servings needed (all nutrient minimums are zero).");
    }

    // Find max food name length for alignment
    let max_name_len = chosen.iter().map(|s| s.food.len()).max().unwrap_or(10);

    for (i, s) in chosen.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} x {:>3} | cost {:>8.2} | volume {:>7.2}",
            i + 1,
            s.food,
            s.servings,
            s.cost,
            s.volume,
            width = max_name_len
        );
    }

    if !solution.nutrients.is_empty() {
        println!();
        println!("--- Nutrients ---");
        let width = solution
            .nutrients
            .iter()
            .map(|n| n.nutrient.len())
            .max()
            .unwrap_or(10);
        for n in &solution.nutrients {
            let tag = if n.is_at_bound(FEASIBILITY_TOLERANCE) {
                "  [at bound]"
            } else {
                ""
            };
            println!(
                "  {:<width$} {:>10.2}  in [{}, {}]{}",
                n.nutrient,
                n.amount,
                format_bound(n.min),
                format_bound(n.max),
                tag,
                width = width
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total servings: {}", solution.total_servings());
    println!(
        "Total volume: {:.2} of {:.2} (slack {:.2})",
        solution.total_volume,
        solution.max_volume,
        solution.volume_slack()
    );
    println!("Total cost: {:.2}", solution.total_cost);
    println!();
}

/// Display any outcome; non-optimal statuses get a one-line explanation.
pub fn display_outcome(outcome: &Outcome<DietSolution>) {
    match outcome {
        Outcome::Optimal(solution) => display_solution(solution),
        Outcome::Infeasible => {
            println!("Status: infeasible. No serving plan meets every nutrient and volume limit.")
        }
        Outcome::Unbounded => {
            println!("Status: unbounded. The cost has no finite minimum; check the cost data.")
        }
        Outcome::Error(msg) => println!("Status: error. {}", msg),
    }
}

/// Display the declared sets, parameters and variables.
pub fn display_declarations(template: &ModelTemplate) {
    println!();
    println!("=== Declarations ===");
    println!();

    println!("Sets:");
    for set in template.sets() {
        println!("  {:<6} {}", set.name, set.doc);
    }

    println!("Parameters:");
    for p in template.params() {
        let default = p
            .default
            .map(|d| format!(" (default {})", format_bound(d)))
            .unwrap_or_default();
        println!(
            "  {:<10} in {:<17} {}{}",
            format!("{}{}", p.name, p.index.as_str()),
            p.domain.as_str(),
            p.doc,
            default
        );
    }

    println!("Variables:");
    for v in template.variables() {
        println!(
            "  {:<10} in {:<17} {}",
            format!("{}{}", v.name, v.index.as_str()),
            v.domain.as_str(),
            v.doc
        );
    }
    println!();
}

/// Display the instantiated objective and every constraint.
pub fn display_model(instance: &DietInstance) {
    let problem = instance.problem();
    let names = problem.variable_names();

    println!("=== Model ===");
    println!();
    println!(
        "minimize {}: {}",
        problem.objective.name,
        problem.objective.expr.display_with(&names)
    );
    println!();
    println!("subject to:");
    for c in &problem.constraints {
        println!("  {}: {}", c.name, c.display_with(&names));
    }
    println!();
    println!("  x[f] in NonNegativeIntegers for all {} foods", names.len());
    println!();
}

/// Display the size of a bound instance.
pub fn display_instance_summary(instance: &DietInstance) {
    println!("Foods ({}): {}", instance.foods().name(), instance.foods().len());
    println!(
        "Nutrients ({}): {}",
        instance.nutrients().name(),
        instance.nutrients().len()
    );
    println!("Maximum volume: {}", instance.max_volume());
}
