use std::path::Path;

use tracing::info;

use crate::controllers::params_record::{RenderRecord, read_render_record};
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::compute_fractal::compute_fractal::{FractalOutput, compute_fractal};
use crate::core::actions::normalize_field::normalize_field::FieldStats;
use crate::core::actions::normalize_field::normalize_settings::NormalizeSettings;
use crate::core::fractals::lyapunov::params::LyapunovParams;

/// Summary of a computed field, for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub samples: usize,
    pub valid_samples: usize,
    pub min_exponent: Option<f64>,
    pub max_exponent: Option<f64>,
    pub chaotic_fraction: f64,
    pub mean_display: f64,
}

impl FieldSummary {
    #[must_use]
    pub fn from_output(output: &FractalOutput, settings: &NormalizeSettings) -> Self {
        let raw = output.raw.values();
        let stats = FieldStats::collect(raw, settings);
        let samples = raw.len();
        let chaotic = raw
            .iter()
            .filter(|&&value| settings.is_valid_sample(value) && value > 0.0)
            .count();
        let display = output.normalized.values();

        Self {
            samples,
            valid_samples: stats.valid_count,
            min_exponent: (stats.valid_count > 0).then_some(stats.min),
            max_exponent: (stats.valid_count > 0).then_some(stats.max),
            chaotic_fraction: if samples == 0 { 0.0 } else { chaotic as f64 / samples as f64 },
            mean_display: if display.is_empty() {
                0.0
            } else {
                display.iter().sum::<f64>() / display.len() as f64
            },
        }
    }
}

pub struct CliController {
    params: LyapunovParams,
    settings: NormalizeSettings,
    output: Option<FractalOutput>,
}

impl CliController {
    pub fn new(params: LyapunovParams, settings: NormalizeSettings) -> Self {
        Self {
            params,
            settings,
            output: None,
        }
    }

    /// Builds a controller from an optional JSON parameter record path.
    pub fn from_record_path(path: Option<impl AsRef<Path>>) -> Result<Self, Box<dyn std::error::Error>> {
        let record = match path {
            Some(path) => {
                info!(path = %path.as_ref().display(), "reading parameter record");
                read_render_record(path)?
            }
            None => RenderRecord::default(),
        };

        Ok(Self::new(record.params, record.settings))
    }

    #[must_use]
    pub fn params(&self) -> &LyapunovParams {
        &self.params
    }

    #[must_use]
    pub fn settings(&self) -> &NormalizeSettings {
        &self.settings
    }

    #[must_use]
    pub fn output(&self) -> Option<&FractalOutput> {
        self.output.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut last_logged = 0.0;
        let mut progress = |fraction: f64| {
            if fraction - last_logged >= 0.25 || fraction == 1.0 {
                info!(progress = fraction, "sampling");
                last_logged = fraction;
            }
        };

        self.output = Some(compute_fractal(
            &self.params,
            &self.settings,
            &NeverCancel,
            &mut progress,
        )?);

        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> Option<FieldSummary> {
        self.output
            .as_ref()
            .map(|output| FieldSummary::from_output(output, &self.settings))
    }

    pub fn log_summary(&self) {
        if let Some(summary) = self.summary() {
            info!(
                samples = summary.samples,
                valid = summary.valid_samples,
                min_exponent = ?summary.min_exponent,
                max_exponent = ?summary.max_exponent,
                chaotic_fraction = summary.chaotic_fraction,
                mean_display = summary.mean_display,
                "field summary"
            );
        }
    }
}
