pub mod pixel_to_parameter_coords;
