pub mod cli;
pub mod params_record;
