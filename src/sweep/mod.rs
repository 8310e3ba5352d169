pub mod output;
pub mod runner;

pub use output::{print_table, write_best_json, write_csv};
pub use runner::{cheapest, run_sweep, SweepConfig, SweepStep};
