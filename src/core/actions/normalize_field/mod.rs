pub mod normalize_field;
pub mod normalize_settings;
