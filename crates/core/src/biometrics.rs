//! Biometric scaler.
//!
//! Maps patient biometrics to the two render parameters of the body model: a horizontal
//! silhouette scale (from BMI) and an animation beat period (from resting heart rate).
//! Everything here is total; out-of-range input is coerced, never rejected.

use bodymap_types::Gender;
use serde::{Deserialize, Serialize};

use crate::config::BiometricDefaults;
use crate::constants::{
    BMI_OVERWEIGHT_ABOVE, BMI_UNDERWEIGHT_BELOW, DEFAULT_HEART_RATE_BPM, HEART_RATE_MAX_BPM,
    HEART_RATE_MIN_BPM, SCALE_MAX, SCALE_NORMAL, SCALE_PER_BMI_POINT, SCALE_UNDERWEIGHT,
};

/// Patient attributes supplied by the host. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricInputs {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub resting_heart_rate_bpm: Option<f64>,
}

/// Biometrics with defaults substituted, ready for scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBiometrics {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub heart_rate_bpm: f64,
}

impl BiometricInputs {
    /// Substitutes `defaults` for missing fields.
    ///
    /// A present weight is kept even when zero or negative; the silhouette scale bands it as
    /// underweight. Height is the BMI divisor, so a height that is not finite and positive
    /// counts as missing. Heart rate is only replaced when missing or NaN; the beat period clamps
    /// everything else.
    pub fn resolve(&self, defaults: &BiometricDefaults) -> ResolvedBiometrics {
        ResolvedBiometrics {
            gender: Gender::resolve(self.gender.as_deref()),
            weight_kg: self
                .weight_kg
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.weight_kg),
            height_cm: self
                .height_cm
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.height_cm),
            heart_rate_bpm: self
                .resting_heart_rate_bpm
                .filter(|v| !v.is_nan())
                .unwrap_or(defaults.heart_rate_bpm),
        }
    }
}

impl ResolvedBiometrics {
    pub fn bmi(&self) -> f64 {
        body_mass_index(self.weight_kg, self.height_cm)
    }

    pub fn silhouette_scale(&self) -> f64 {
        silhouette_scale(self.bmi())
    }

    pub fn beat_period_seconds(&self) -> f64 {
        beat_period_seconds(self.heart_rate_bpm)
    }
}

/// Body-mass index: `weight_kg / (height_cm / 100)^2`.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Horizontal silhouette scale for a BMI.
///
/// `0.9` below 18.5, `1.0` up to and including 25, then `+0.015` per BMI point capped at `1.3`.
/// A NaN BMI scales as normal.
pub fn silhouette_scale(bmi: f64) -> f64 {
    if bmi.is_nan() {
        return SCALE_NORMAL;
    }
    if bmi < BMI_UNDERWEIGHT_BELOW {
        SCALE_UNDERWEIGHT
    } else if bmi <= BMI_OVERWEIGHT_ABOVE {
        SCALE_NORMAL
    } else {
        SCALE_MAX.min(SCALE_NORMAL + (bmi - BMI_OVERWEIGHT_ABOVE) * SCALE_PER_BMI_POINT)
    }
}

/// Animation beat period in seconds: `60 / clamp(bpm, 40, 180)`.
///
/// NaN is treated as the default resting rate.
pub fn beat_period_seconds(heart_rate_bpm: f64) -> f64 {
    let bpm = if heart_rate_bpm.is_nan() {
        DEFAULT_HEART_RATE_BPM
    } else {
        heart_rate_bpm
    };
    60.0 / bpm.clamp(HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM)
}
