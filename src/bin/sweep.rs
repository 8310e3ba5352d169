use std::path::PathBuf;

use clap::Parser;

use diet_model_rs::data::load_data;
use diet_model_rs::logging;
use diet_model_rs::model::constants::DEFAULT_DATA_PATH;
use diet_model_rs::model::ModelTemplate;
use diet_model_rs::solver::MicroLpSolver;
use diet_model_rs::sweep::{cheapest, print_table, run_sweep, write_best_json, write_csv, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Re-solve the diet model over a range of maximum volumes")]
struct Args {
    /// Data instance: a JSON file or a directory of CSV tables
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Explicit volume caps (comma-separated); overrides --from/--to/--step
    #[arg(long)]
    volumes: Option<String>,

    /// First volume cap
    #[arg(long, default_value = "10")]
    from: f64,

    /// Last volume cap (inclusive)
    #[arg(long, default_value = "100")]
    to: f64,

    /// Increment between caps
    #[arg(long, default_value = "10")]
    step: f64,

    /// Output CSV file for all steps
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the cheapest step
    #[arg(long, default_value = "sweep_best.json")]
    json: PathBuf,

    /// Log each solve to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let data = match load_data(&args.data) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error loading data {:?}: {}", args.data, e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} foods and {} nutrients from {:?}",
        data.foods.len(),
        data.nutrients.len(),
        args.data
    );

    let config = match &args.volumes {
        Some(list) => SweepConfig::from_list(list),
        None => match SweepConfig::range(args.from, args.to, args.step) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };

    if config.volumes.is_empty() {
        eprintln!("Error: no valid volume caps provided");
        std::process::exit(1);
    }

    let template = ModelTemplate::declare();
    let steps = match run_sweep(&template, &data, &MicroLpSolver, &config) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_table(&steps);

    let best = cheapest(&steps);
    match best {
        Some(step) => println!(
            "Cheapest: cost {:.2} at max volume {}",
            step.total_cost.unwrap_or_default(),
            step.max_volume
        ),
        None => println!("No volume cap in the sweep admits a feasible diet."),
    }
    println!();

    if let Err(e) = write_csv(&steps, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all steps to {:?}", args.csv);
    }

    if let Err(e) = write_best_json(best, &steps, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote cheapest step to {:?}", args.json);
    }
}
