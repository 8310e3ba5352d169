use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::constants::DEFAULT_DATA_PATH;

/// Minimum-cost integer diet under nutrient and volume limits.
#[derive(Parser, Debug)]
#[command(name = "diet_model")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Data instance: a JSON file or a directory of CSV tables.
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Log model building and solver progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the model, solve it and print the serving plan.
    Solve {
        /// Replace the data's maximum total volume.
        #[arg(long)]
        max_volume: Option<f64>,

        /// Print the outcome as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Also write the serving plan to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Bind the data to the model and report problems without solving.
    Check,

    /// Print the declarations and the instantiated algebraic model.
    Show,
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve {
            max_volume: None,
            json: false,
            csv: None,
        }
    }
}
