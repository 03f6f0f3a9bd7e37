//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the engine. Hosts
//! read environment variables (or flags) before constructing [`CoreConfig`]; nothing in this
//! crate reads process-wide state while rendering.

use crate::constants::{
    DEFAULT_HEART_RATE_BPM, DEFAULT_HEIGHT_CM, DEFAULT_SNIPPET_MAX_CHARS, DEFAULT_WEIGHT_KG,
};
use crate::{BodyMapError, BodyMapResult};

/// Values substituted for biometric fields the host leaves out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiometricDefaults {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub heart_rate_bpm: f64,
}

impl Default for BiometricDefaults {
    fn default() -> Self {
        Self {
            weight_kg: DEFAULT_WEIGHT_KG,
            height_cm: DEFAULT_HEIGHT_CM,
            heart_rate_bpm: DEFAULT_HEART_RATE_BPM,
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    biometric_defaults: BiometricDefaults,
    snippet_max_chars: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `BodyMapError::InvalidInput` if any default is not a finite positive number or
    /// `snippet_max_chars` is zero.
    pub fn new(
        biometric_defaults: BiometricDefaults,
        snippet_max_chars: usize,
    ) -> BodyMapResult<Self> {
        let fields = [
            ("weight_kg", biometric_defaults.weight_kg),
            ("height_cm", biometric_defaults.height_cm),
            ("heart_rate_bpm", biometric_defaults.heart_rate_bpm),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(BodyMapError::InvalidInput(format!(
                    "default {name} must be a finite positive number (got {value})"
                )));
            }
        }

        if snippet_max_chars == 0 {
            return Err(BodyMapError::InvalidInput(
                "snippet_max_chars must be greater than zero".into(),
            ));
        }

        Ok(Self {
            biometric_defaults,
            snippet_max_chars,
        })
    }

    pub fn biometric_defaults(&self) -> BiometricDefaults {
        self.biometric_defaults
    }

    pub fn snippet_max_chars(&self) -> usize {
        self.snippet_max_chars
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            biometric_defaults: BiometricDefaults::default(),
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
        }
    }
}

/// Parse biometric defaults from optional raw values (typically environment variables).
///
/// `None` or empty/whitespace values fall back to the built-in defaults.
pub fn biometric_defaults_from_env_values(
    weight_kg: Option<String>,
    height_cm: Option<String>,
    heart_rate_bpm: Option<String>,
) -> BodyMapResult<BiometricDefaults> {
    fn parse(name: &str, value: Option<String>, fallback: f64) -> BodyMapResult<f64> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        match value {
            None => Ok(fallback),
            Some(v) => v.parse::<f64>().map_err(|e| {
                BodyMapError::InvalidInput(format!("{name} is not a number ({v:?}): {e}"))
            }),
        }
    }

    Ok(BiometricDefaults {
        weight_kg: parse("weight_kg", weight_kg, DEFAULT_WEIGHT_KG)?,
        height_cm: parse("height_cm", height_cm, DEFAULT_HEIGHT_CM)?,
        heart_rate_bpm: parse("heart_rate_bpm", heart_rate_bpm, DEFAULT_HEART_RATE_BPM)?,
    })
}
