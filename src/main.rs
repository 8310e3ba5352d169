use clap::Parser;
use std::path::Path;

use diet_model_rs::cli::{Cli, Command};
use diet_model_rs::data::{load_data, outcome_json, write_solution_csv};
use diet_model_rs::error::Result;
use diet_model_rs::interface::{
    display_declarations, display_instance_summary, display_model, display_outcome,
};
use diet_model_rs::logging;
use diet_model_rs::model::ModelTemplate;
use diet_model_rs::solver::{MicroLpSolver, Outcome};

/// Exit code when the solve finished without an optimal plan.
const EXIT_NOT_OPTIMAL: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve {
            max_volume,
            json,
            csv,
        } => cmd_solve(&cli.data, max_volume, json, csv.as_deref()),
        Command::Check => cmd_check(&cli.data),
        Command::Show => cmd_show(&cli.data),
    }
}

/// Solve the diet model for the given data.
fn cmd_solve(
    data_path: &Path,
    max_volume: Option<f64>,
    json: bool,
    csv_path: Option<&Path>,
) -> Result<i32> {
    let mut data = load_data(data_path)?;
    if let Some(v) = max_volume {
        data = data.with_max_volume(v);
    }

    let template = ModelTemplate::declare();
    let instance = template.instantiate(&data)?;

    let outcome = instance.solve(&MicroLpSolver);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
    } else {
        println!(
            "Solving for {} foods and {} nutrients...",
            instance.foods().len(),
            instance.nutrients().len()
        );
        display_outcome(&outcome);
    }

    if let (Outcome::Optimal(solution), Some(path)) = (&outcome, csv_path) {
        write_solution_csv(solution, path)?;
        if !json {
            println!("Serving plan written to {}", path.display());
        }
    }

    Ok(if outcome.is_optimal() { 0 } else { EXIT_NOT_OPTIMAL })
}

/// Bind the data and report, without solving.
fn cmd_check(data_path: &Path) -> Result<i32> {
    let data = load_data(data_path)?;
    let instance = ModelTemplate::declare().instantiate(&data)?;

    println!("Data is valid for the diet model.");
    display_instance_summary(&instance);

    let empty: Vec<&str> = instance
        .build_nutrient_constraints()
        .iter()
        .zip(instance.nutrients().ids())
        .filter(|(c, _)| c.expr.is_constant() && c.lower > 0.0)
        .map(|(_, id)| id.as_str())
        .collect();
    if !empty.is_empty() {
        println!(
            "Note: no food supplies {}; the solver will report the model infeasible.",
            empty.join(", ")
        );
    }

    Ok(0)
}

/// Print declarations and the instantiated model.
fn cmd_show(data_path: &Path) -> Result<i32> {
    let template = ModelTemplate::declare();
    display_declarations(&template);

    let data = load_data(data_path)?;
    let instance = template.instantiate(&data)?;
    display_model(&instance);

    Ok(0)
}
