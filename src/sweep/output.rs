use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::runner::SweepStep;

fn optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

/// Write every step to a CSV file. Non-optimal steps leave the totals empty.
pub fn write_csv(steps: &[SweepStep], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "max_volume",
        "status",
        "total_cost",
        "total_volume",
        "total_servings",
    ])?;

    for s in steps {
        wtr.write_record([
            format!("{}", s.max_volume),
            s.status.to_string(),
            optional(s.total_cost, 2),
            optional(s.total_volume, 2),
            s.total_servings.map(|n| n.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the chosen step and the full sweep to a JSON file.
pub fn write_best_json(best: Option<&SweepStep>, steps: &[SweepStep], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "best": best,
        "steps": steps,
    });

    let mut file = File::create(path)?;
    writeln!(file, "{}", serde_json::to_string_pretty(&json)?)?;
    Ok(())
}

/// Print the sweep as a table.
pub fn print_table(steps: &[SweepStep]) {
    println!();
    println!("=== Volume Sweep ({} steps) ===", steps.len());
    println!();
    println!(
        "{:>10}  {:<10}  {:>10}  {:>10}  {:>8}",
        "max_vol", "status", "cost", "volume", "servings"
    );
    for s in steps {
        println!(
            "{:>10.2}  {:<10}  {:>10}  {:>10}  {:>8}",
            s.max_volume,
            s.status.as_str(),
            optional(s.total_cost, 2),
            optional(s.total_volume, 2),
            s.total_servings.map(|n| n.to_string()).unwrap_or_default()
        );
    }
    println!();
}
