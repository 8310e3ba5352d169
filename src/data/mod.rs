mod export;
mod persistence;

pub use export::{outcome_json, write_solution_csv};
pub use persistence::{
    load_csv_dir, load_data, load_json, save_data, CONTENTS_FILE, FOODS_FILE, NUTRIENTS_FILE,
    PARAMS_FILE,
};
