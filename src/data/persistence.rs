use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{DietError, Result};
use crate::models::{DietData, Food, Nutrient, NutrientContent};

pub const FOODS_FILE: &str = "foods.csv";
pub const NUTRIENTS_FILE: &str = "nutrients.csv";
pub const CONTENTS_FILE: &str = "contents.csv";
pub const PARAMS_FILE: &str = "params.csv";

/// Load a data instance from a JSON file or a directory of CSV tables.
///
/// Only IO and parse errors are reported here. Domain and reference checks
/// happen when the data is bound to a model.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<DietData> {
    let path = path.as_ref();
    if path.is_dir() {
        load_csv_dir(path)
    } else {
        load_json(path)
    }
}

pub fn load_json<P: AsRef<Path>>(path: P) -> Result<DietData> {
    let content = fs::read_to_string(path)?;
    let data: DietData = serde_json::from_str(&content)?;
    debug!(
        foods = data.foods.len(),
        nutrients = data.nutrients.len(),
        "loaded JSON data"
    );
    Ok(data)
}

/// Save a data instance as pretty-printed JSON.
pub fn save_data<P: AsRef<Path>>(path: P, data: &DietData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ParamRow {
    name: String,
    value: f64,
}

/// Read `foods.csv`, `nutrients.csv`, `contents.csv` and, if present,
/// `params.csv` from `dir`.
pub fn load_csv_dir<P: AsRef<Path>>(dir: P) -> Result<DietData> {
    let dir = dir.as_ref();

    let foods: Vec<Food> = read_table(&dir.join(FOODS_FILE))?;
    let nutrients: Vec<Nutrient> = read_table(&dir.join(NUTRIENTS_FILE))?;
    let contents: Vec<NutrientContent> = read_table(&dir.join(CONTENTS_FILE))?;

    let mut max_volume = None;
    let params_path = dir.join(PARAMS_FILE);
    if params_path.exists() {
        for row in read_table::<ParamRow>(&params_path)? {
            match row.name.as_str() {
                "max_volume" | "Vmax" => max_volume = Some(row.value),
                other => {
                    return Err(DietError::InvalidInput(format!(
                        "unknown parameter '{}' in {}",
                        other,
                        params_path.display()
                    )));
                }
            }
        }
    }

    debug!(
        dir = %dir.display(),
        foods = foods.len(),
        nutrients = nutrients.len(),
        contents = contents.len(),
        "loaded CSV data"
    );

    Ok(DietData {
        foods,
        nutrients,
        contents,
        max_volume,
    })
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
