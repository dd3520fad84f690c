pub mod compute_fractal;
