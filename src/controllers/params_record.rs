//! Host-side parameter records.
//!
//! A record is a flat JSON object carrying any subset of the computation
//! fields and the display settings. Absent fields take their defaults; a
//! field that is present with the wrong type or an out-of-range value fails
//! the whole record. Keys neither side knows are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::core::actions::normalize_field::normalize_settings::NormalizeSettings;
use crate::core::fractals::lyapunov::params::LyapunovParams;

const KNOWN_FIELDS: &[&str] = &[
    "min_x",
    "max_x",
    "min_y",
    "max_y",
    "width",
    "height",
    "sequence",
    "iterations",
    "warmup",
    "gamma",
    "steepness",
    "validity_threshold",
];

#[derive(Debug, Error)]
pub enum ParamsRecordError {
    #[error("failed to read parameter record: {0}")]
    Io(#[from] std::io::Error),
    #[error("parameter record must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("malformed parameter record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything one record configures: what to sample and how to display it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderRecord {
    pub params: LyapunovParams,
    pub settings: NormalizeSettings,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn log_record_keys(record: &Map<String, Value>) {
    let (known, ignored): (Vec<&str>, Vec<&str>) = record
        .keys()
        .map(String::as_str)
        .partition(|key| KNOWN_FIELDS.contains(key));

    debug!(?known, "parameter record fields");
    if !ignored.is_empty() {
        debug!(?ignored, "ignoring unknown parameter record fields");
    }
}

pub fn record_from_value(value: Value) -> Result<RenderRecord, ParamsRecordError> {
    let Value::Object(record) = &value else {
        return Err(ParamsRecordError::NotAnObject(json_kind(&value)));
    };

    log_record_keys(record);

    // both halves read the same flat object and skip each other's keys
    Ok(RenderRecord {
        params: LyapunovParams::deserialize(&value)?,
        settings: NormalizeSettings::deserialize(&value)?,
    })
}

pub fn parse_render_record(json: &str) -> Result<RenderRecord, ParamsRecordError> {
    record_from_value(serde_json::from_str(json)?)
}

pub fn read_render_record(path: impl AsRef<Path>) -> Result<RenderRecord, ParamsRecordError> {
    parse_render_record(&fs::read_to_string(path)?)
}
