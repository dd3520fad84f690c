pub mod forcing_sequence;
pub mod grid_size;
pub mod lyapunov_field;
pub mod parameter_rect;
pub mod point;
