//! Scale form submission pipeline.
//!
//! Reads the five raw text fields of the scale form, runs them through
//! [`map_range`](crate::map_range), and produces the display text plus the
//! pacing duration derived from where the result landed in the target
//! interval.

use serde::{Deserialize, Serialize};

use crate::mapper::map_range;

/// Base duration in milliseconds before the position-dependent share is added.
pub const BASE_DURATION_MS: f64 = 300.0;
/// Position-dependent share, added in full when the result sits at `out_min`.
pub const DURATION_SPAN_MS: f64 = 1700.0;
/// Lower bound for any derived duration.
pub const MIN_DURATION_MS: u64 = 200;

/// Raw text of the five scale form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleForm {
    pub value: String,
    pub in_min: String,
    pub in_max: String,
    pub out_min: String,
    pub out_max: String,
}

impl Default for ScaleForm {
    fn default() -> Self {
        Self::with_target(0.0, 100.0)
    }
}

/// Result of submitting the scale form.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleOutcome {
    /// The value was mapped successfully
    Scaled {
        /// The mapped value
        value: f64,
        /// Display text, e.g. `Scaled value: 50.000`
        text: String,
        /// Derived pacing duration, `None` when it is not computable
        duration_ms: Option<u64>,
    },
    /// Mapping failed, `text` is the rendered error
    Failed { text: String },
}

impl ScaleOutcome {
    /// Returns the text to show under the form.
    pub fn text(&self) -> &str {
        match self {
            ScaleOutcome::Scaled { text, .. } => text,
            ScaleOutcome::Failed { text } => text,
        }
    }

    /// Returns true if the submission failed.
    pub fn is_error(&self) -> bool {
        matches!(self, ScaleOutcome::Failed { .. })
    }
}

impl ScaleForm {
    /// Creates a form prefilled with a 0..10 source interval and the given target interval.
    pub fn with_target(out_min: f64, out_max: f64) -> Self {
        Self {
            value: "5".to_string(),
            in_min: "0".to_string(),
            in_max: "10".to_string(),
            out_min: out_min.to_string(),
            out_max: out_max.to_string(),
        }
    }

    /// Parses all five fields as `(value, in_min, in_max, out_min, out_max)`.
    pub fn parse(&self) -> (f64, f64, f64, f64, f64) {
        (
            parse_field(&self.value),
            parse_field(&self.in_min),
            parse_field(&self.in_max),
            parse_field(&self.out_min),
            parse_field(&self.out_max),
        )
    }

    /// Maps the form's value and renders the outcome.
    pub fn submit(&self) -> ScaleOutcome {
        let (value, in_min, in_max, out_min, out_max) = self.parse();

        match map_range(value, in_min, in_max, out_min, out_max) {
            Ok(result) => {
                let duration_ms = derive_duration_ms(result, out_min, out_max);
                tracing::debug!(value, result, ?duration_ms, "scale form submitted");
                ScaleOutcome::Scaled {
                    value: result,
                    text: format_scaled(result),
                    duration_ms,
                }
            }
            Err(err) => {
                tracing::debug!(%err, "scale form rejected");
                ScaleOutcome::Failed { text: format!("Error: {}", err) }
            }
        }
    }
}

/// Parses one numeric form field.
///
/// Surrounding whitespace is ignored. Anything that is not a number, including
/// empty text, becomes NaN and flows through the mapping unvalidated.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a mapped value with three decimals.
pub fn format_scaled(value: f64) -> String {
    format!("Scaled value: {:.3}", value)
}

/// Derives a pacing duration from where `result` sits in the target interval.
///
/// `300 + round((1 - (result - out_min) / (out_max - out_min)) * 1700)`,
/// never below 200 ms. A result at `out_min` gives the slowest pace, one at
/// `out_max` the fastest. Returns `None` when the expression is not finite,
/// e.g. for an empty target interval.
pub fn derive_duration_ms(result: f64, out_min: f64, out_max: f64) -> Option<u64> {
    let position = (result - out_min) / (out_max - out_min);
    let raw = BASE_DURATION_MS + ((1.0 - position) * DURATION_SPAN_MS).round();
    if !raw.is_finite() {
        return None;
    }
    Some(raw.max(MIN_DURATION_MS as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: [&str; 5]) -> ScaleForm {
        ScaleForm {
            value: fields[0].to_string(),
            in_min: fields[1].to_string(),
            in_max: fields[2].to_string(),
            out_min: fields[3].to_string(),
            out_max: fields[4].to_string(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let outcome = form(["5", "0", "10", "0", "100"]).submit();
        assert_eq!(
            outcome,
            ScaleOutcome::Scaled {
                value: 50.0,
                text: "Scaled value: 50.000".to_string(),
                duration_ms: Some(1150),
            }
        );
    }

    #[test]
    fn test_default_form_is_the_demo_scenario() {
        let outcome = ScaleForm::default().submit();
        assert_eq!(outcome.text(), "Scaled value: 50.000");
    }

    #[test]
    fn test_empty_source_interval_renders_error() {
        let outcome = form(["5", "3", "3", "0", "100"]).submit();
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), "Error: source interval is empty: both bounds are 3");
    }

    #[test]
    fn test_three_decimal_rendering() {
        assert_eq!(format_scaled(1.0 / 3.0), "Scaled value: 0.333");
        assert_eq!(format_scaled(-2.0), "Scaled value: -2.000");
        assert_eq!(format_scaled(f64::NAN), "Scaled value: NaN");
    }

    #[test]
    fn test_non_numeric_field_becomes_nan() {
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("").is_nan());
        assert_eq!(parse_field(" 2.5 "), 2.5);

        let outcome = form(["abc", "0", "10", "0", "100"]).submit();
        match outcome {
            ScaleOutcome::Scaled { value, text, duration_ms } => {
                assert!(value.is_nan());
                assert_eq!(text, "Scaled value: NaN");
                assert_eq!(duration_ms, None);
            }
            other => panic!("expected a scaled outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_duration_extremes() {
        // Result at out_min is the slowest, at out_max the fastest
        assert_eq!(derive_duration_ms(0.0, 0.0, 100.0), Some(2000));
        assert_eq!(derive_duration_ms(100.0, 0.0, 100.0), Some(300));
        // Inverted target interval measures from out_min as well
        assert_eq!(derive_duration_ms(100.0, 100.0, 0.0), Some(2000));
    }

    #[test]
    fn test_duration_floor() {
        // Only reachable for results past out_max
        assert_eq!(derive_duration_ms(200.0, 0.0, 100.0), Some(MIN_DURATION_MS));
    }

    #[test]
    fn test_duration_not_computable() {
        assert_eq!(derive_duration_ms(5.0, 5.0, 5.0), None);
        assert_eq!(derive_duration_ms(f64::NAN, 0.0, 1.0), None);
    }
}
