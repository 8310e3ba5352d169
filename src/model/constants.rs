/// Largest distance from an integer accepted for a solved serving count.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Absolute slack allowed when re-checking constraints on a solved assignment.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Dataset used by the CLI when `--data` is not given.
pub const DEFAULT_DATA_PATH: &str = "data/diet.json";

/// Name of the objective.
pub const OBJECTIVE_NAME: &str = "cost";

/// Name of the single volume constraint.
pub const VOLUME_CONSTRAINT_NAME: &str = "volume";

/// Prefix of the per-nutrient constraints (`nutrient_limit[<id>]`).
pub const NUTRIENT_CONSTRAINT_PREFIX: &str = "nutrient_limit";

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_MIN_SIMILARITY: f64 = 0.8;
