pub mod render;

pub use render::{
    display_declarations, display_instance_summary, display_model, display_outcome,
    display_solution,
};
