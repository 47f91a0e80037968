//! Display configuration
//!
//! Thresholds and length limits for the magnitude-dependent display. The
//! defaults reproduce the reference calculator; a JSON file can override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Most fraction digits grouped notation can keep
pub const MAX_GROUPED_FRACTION_DIGITS: usize = 20;

/// Most mantissa fraction digits exponent notation can keep
pub const MAX_EXPONENT_FRACTION_DIGITS: usize = 100;

/// Display thresholds and size-class limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Magnitudes at or above this render in exponent notation
    pub exponential_threshold: f64,
    /// Magnitudes at or above this (and below the exponential threshold)
    /// render with grouped thousands
    pub grouping_threshold: f64,
    /// Fraction digits kept in grouped notation
    pub max_fraction_digits: usize,
    /// Mantissa fraction digits in exponent notation
    pub exponent_fraction_digits: usize,
    /// Longest display text that keeps the normal size class
    pub normal_max_len: usize,
    /// Longest display text that keeps the small size class
    pub small_max_len: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            exponential_threshold: 1e9,
            grouping_threshold: 1e6,
            max_fraction_digits: 8,
            exponent_fraction_digits: 2,
            normal_max_len: 6,
            small_max_len: 9,
        }
    }
}

impl DisplayConfig {
    /// Create the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exponent-notation threshold
    #[must_use]
    pub fn with_exponential_threshold(mut self, threshold: f64) -> Self {
        self.exponential_threshold = threshold;
        self
    }

    /// Set the grouped-notation threshold
    #[must_use]
    pub fn with_grouping_threshold(mut self, threshold: f64) -> Self {
        self.grouping_threshold = threshold;
        self
    }

    /// Set the fraction digits kept in grouped notation
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set the size-class length limits
    #[must_use]
    pub const fn with_size_limits(mut self, normal_max_len: usize, small_max_len: usize) -> Self {
        self.normal_max_len = normal_max_len;
        self.small_max_len = small_max_len;
        self
    }

    /// Parses and validates a JSON config; missing fields take defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that thresholds are positive and ordered, and digit counts in range.
    pub fn validate(&self) -> CalcResult<()> {
        for (name, value) in [
            ("exponential_threshold", self.exponential_threshold),
            ("grouping_threshold", self.grouping_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::Config(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if self.grouping_threshold > self.exponential_threshold {
            return Err(CalcError::Config(format!(
                "grouping_threshold ({}) exceeds exponential_threshold ({})",
                self.grouping_threshold, self.exponential_threshold
            )));
        }
        for (name, value, max) in [
            (
                "max_fraction_digits",
                self.max_fraction_digits,
                MAX_GROUPED_FRACTION_DIGITS,
            ),
            (
                "exponent_fraction_digits",
                self.exponent_fraction_digits,
                MAX_EXPONENT_FRACTION_DIGITS,
            ),
        ] {
            if value > max {
                return Err(CalcError::Config(format!(
                    "{name} must be at most {max}, got {value}"
                )));
            }
        }
        if self.normal_max_len > self.small_max_len {
            return Err(CalcError::Config(format!(
                "normal_max_len ({}) exceeds small_max_len ({})",
                self.normal_max_len, self.small_max_len
            )));
        }
        Ok(())
    }
}
