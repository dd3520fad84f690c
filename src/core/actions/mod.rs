pub mod cancellation;
pub mod compute_fractal;
pub mod generate_fractal;
pub mod normalize_field;
pub mod progress;
