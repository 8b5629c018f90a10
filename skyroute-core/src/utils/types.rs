/// Alias to a scalar floating type used for distances and fitness values.
pub type Float = f64;
