use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::normalize_field::normalize_settings::NormalizeSettings;
use crate::core::data::lyapunov_field::LyapunovField;

/// Min/max over the valid samples of a field.
///
/// `combine` is associative and commutative with [`FieldStats::EMPTY`] as its
/// identity, so partial statistics from any split of the data merge to the
/// same result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub valid_count: usize,
}

impl FieldStats {
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        valid_count: 0,
    };

    #[inline]
    #[must_use]
    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
            valid_count: self.valid_count + 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            valid_count: self.valid_count + other.valid_count,
        }
    }

    /// `(min, max)` when the valid samples span a non-empty range.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        (self.valid_count > 0 && self.min < self.max).then_some((self.min, self.max))
    }

    #[must_use]
    pub fn collect(values: &[f64], settings: &NormalizeSettings) -> Self {
        values
            .par_iter()
            .fold(
                || Self::EMPTY,
                |stats, &value| {
                    if settings.is_valid_sample(value) {
                        stats.include(value)
                    } else {
                        stats
                    }
                },
            )
            .reduce(|| Self::EMPTY, Self::combine)
    }

    #[must_use]
    pub fn collect_serial(values: &[f64], settings: &NormalizeSettings) -> Self {
        values
            .iter()
            .copied()
            .filter(|&value| settings.is_valid_sample(value))
            .fold(Self::EMPTY, Self::include)
    }
}

#[inline]
fn shape_sample(value: f64, min: f64, range: f64, settings: &NormalizeSettings) -> f64 {
    if settings.is_valid_sample(value) {
        settings.shape((value - min) / range)
    } else {
        0.0
    }
}

/// Rescales raw exponents into `[0, 1]` display values.
///
/// Invalid samples (non-finite, or at or below the validity threshold) map to
/// exactly `0.0`. When no sample is valid, or all valid samples are equal, the
/// whole output is `0.0`.
#[must_use]
pub fn normalize_values(values: &[f64], settings: &NormalizeSettings) -> Vec<f64> {
    let stats = FieldStats::collect(values, settings);

    let Some((min, max)) = stats.range() else {
        debug!(
            samples = values.len(),
            valid = stats.valid_count,
            "degenerate value range, normalized field is all zero"
        );
        return vec![0.0; values.len()];
    };

    debug!(
        samples = values.len(),
        valid = stats.valid_count,
        min,
        max,
        "normalizing field"
    );

    let range = max - min;
    values
        .par_iter()
        .map(|&value| shape_sample(value, min, range, settings))
        .collect()
}

/// Single-threaded counterpart of [`normalize_values`].
#[must_use]
pub fn normalize_values_serial(values: &[f64], settings: &NormalizeSettings) -> Vec<f64> {
    let stats = FieldStats::collect_serial(values, settings);

    let Some((min, max)) = stats.range() else {
        return vec![0.0; values.len()];
    };

    let range = max - min;
    values
        .iter()
        .map(|&value| shape_sample(value, min, range, settings))
        .collect()
}

/// Normalizes a raw field into a new field of the same size.
#[must_use]
pub fn normalize_field(field: &LyapunovField, settings: &NormalizeSettings) -> LyapunovField {
    let values = normalize_values(field.values(), settings);

    match LyapunovField::from_data(field.size(), values) {
        Ok(normalized) => normalized,
        Err(_) => unreachable!("normalization preserves the sample count"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;
    use crate::core::fractals::lyapunov::algorithm::SENTINEL;

    #[test]
    fn stats_ignore_invalid_samples() {
        let values = [SENTINEL, -1.0, f64::NAN, 0.5, f64::INFINITY, -4.0, 0.25];
        let settings = NormalizeSettings::default();

        let stats = FieldStats::collect(&values, &settings);

        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 0.5);
        assert_eq!(stats.valid_count, 3);
        assert_eq!(stats.range(), Some((-1.0, 0.5)));
    }

    #[test]
    fn stats_combine_is_order_independent() {
        let values: Vec<f64> = (0..500).map(|i| ((i * 37) % 101) as f64 / 50.0 - 1.0).collect();
        let settings = NormalizeSettings::default();

        let whole = FieldStats::collect_serial(&values, &settings);
        let (left, right) = values.split_at(123);
        let split = FieldStats::collect_serial(right, &settings)
            .combine(FieldStats::collect_serial(left, &settings));
        let parallel = FieldStats::collect(&values, &settings);

        assert_eq!(split, whole);
        assert_eq!(parallel, whole);
        assert_eq!(FieldStats::EMPTY.combine(whole), whole);
    }

    #[test]
    fn stats_empty_has_no_range() {
        assert_eq!(FieldStats::EMPTY.range(), None);
        assert_eq!(FieldStats::EMPTY.include(1.0).range(), None);
    }

    #[test]
    fn normalize_maps_extremes_through_the_curve() {
        let settings = NormalizeSettings::default();

        let normalized = normalize_values(&[-1.0, 1.0, SENTINEL], &settings);

        assert_eq!(normalized[0], settings.shape(0.0));
        assert_eq!(normalized[1], settings.shape(1.0));
        assert_eq!(normalized[2], 0.0);
    }

    #[test]
    fn normalize_output_is_in_unit_range() {
        let values: Vec<f64> = (0..1000)
            .map(|i| match i % 7 {
                0 => SENTINEL,
                1 => f64::NAN,
                _ => (i as f64 * 0.013).sin() * 3.0,
            })
            .collect();

        let normalized = normalize_values(&values, &NormalizeSettings::default());

        assert_eq!(normalized.len(), values.len());
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
        for (raw, out) in values.iter().zip(&normalized) {
            if !raw.is_finite() || *raw <= -4.0 {
                assert_eq!(*out, 0.0);
            }
        }
    }

    #[test]
    fn normalize_all_equal_is_all_zero() {
        let normalized = normalize_values(&[0.3, 0.3, SENTINEL, 0.3], &NormalizeSettings::default());

        assert_eq!(normalized, vec![0.0; 4]);
    }

    #[test]
    fn normalize_no_valid_samples_is_all_zero() {
        let normalized = normalize_values(&[SENTINEL, f64::NAN, -4.5], &NormalizeSettings::default());

        assert_eq!(normalized, vec![0.0; 3]);
    }

    #[test]
    fn normalize_empty_input_is_empty() {
        assert!(normalize_values(&[], &NormalizeSettings::default()).is_empty());
        assert!(normalize_values_serial(&[], &NormalizeSettings::default()).is_empty());
    }

    #[test]
    fn normalize_parallel_matches_serial() {
        let values: Vec<f64> = (0..4096)
            .map(|i| if i % 13 == 0 { SENTINEL } else { (i as f64 * 0.7).cos() })
            .collect();
        let settings = NormalizeSettings::default();

        assert_eq!(
            normalize_values(&values, &settings),
            normalize_values_serial(&values, &settings)
        );
    }

    #[test]
    fn normalize_respects_custom_threshold() {
        let settings = NormalizeSettings::new(1.0, 7.0, 0.0).unwrap();

        let normalized = normalize_values(&[-0.5, 0.5, 1.5], &settings);

        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], settings.shape(0.0));
        assert_eq!(normalized[2], settings.shape(1.0));
    }

    #[test]
    fn sentinels_stay_zero_under_a_threshold_below_the_sentinel() {
        let settings = NormalizeSettings {
            validity_threshold: -6.0,
            ..Default::default()
        };

        let normalized = normalize_values(&[SENTINEL, -4.5, 0.5, SENTINEL], &settings);

        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[3], 0.0);
        assert_eq!(normalized[1], settings.shape(0.0));
        assert_eq!(normalized[2], settings.shape(1.0));
        assert_eq!(normalized, normalize_values_serial(&[SENTINEL, -4.5, 0.5, SENTINEL], &settings));
    }

    #[test]
    fn normalize_field_keeps_size() {
        let size = GridSize::new(3, 2).unwrap();
        let field = LyapunovField::from_data(size, vec![SENTINEL, -1.0, 0.0, 0.5, 1.0, SENTINEL]).unwrap();

        let normalized = normalize_field(&field, &NormalizeSettings::default());

        assert_eq!(normalized.size(), size);
        assert_eq!(normalized.values()[0], 0.0);
        assert_eq!(normalized.values()[5], 0.0);
        assert_eq!(field.values()[1], -1.0);
    }
}
