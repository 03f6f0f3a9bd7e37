//! Constants used throughout the body map core crate.
//!
//! Numeric policy values for biometric scaling and snippet generation, plus the fixed SVG
//! paint values the style resolver hands to hosts.

/// Weight substituted when the host supplies none, in kilograms.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Height substituted when the host supplies none, in centimetres.
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;

/// Resting heart rate substituted when the host supplies none, in beats per minute.
pub const DEFAULT_HEART_RATE_BPM: f64 = 70.0;

/// Maximum number of characters kept from a record summary when building a snippet.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 50;

/// Suffix appended to a summary snippet that was cut short.
pub const SNIPPET_ELLIPSIS: &str = "...";

/// Snippet attached to regions reached through the generic leg fan-out.
pub const GENERAL_LEG_SNIPPET: &str = "General Leg Issue";

/// Generic lay term that triggers the leg fan-out.
pub const LEG_TERM: &str = "leg";

/// Specific terms whose presence suppresses the leg fan-out.
pub const SPECIFIC_LEG_TERMS: [&str; 3] = ["thigh", "calf", "knee"];

/// Regions the leg fan-out reaches.
pub const LEG_FANOUT_REGIONS: [&str; 3] = ["thighs", "knees", "calves"];

/// BMI below which the silhouette is narrowed.
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI above which the silhouette is widened.
pub const BMI_OVERWEIGHT_ABOVE: f64 = 25.0;

pub const SCALE_UNDERWEIGHT: f64 = 0.9;
pub const SCALE_NORMAL: f64 = 1.0;
pub const SCALE_MAX: f64 = 1.3;

/// Horizontal scale added per BMI point above [`BMI_OVERWEIGHT_ABOVE`].
pub const SCALE_PER_BMI_POINT: f64 = 0.015;

pub const HEART_RATE_MIN_BPM: f64 = 40.0;
pub const HEART_RATE_MAX_BPM: f64 = 180.0;

/// SVG viewBox every outline is drawn in.
pub const VIEW_BOX: &str = "0 0 200 600";

/// Neutral gradient fill for the outer silhouette.
pub const FILL_BODY_GRADIENT: &str = "url(#bodyGradient)";

/// Neutral fill for organs before any colour applies.
pub const FILL_INTERNAL_NEUTRAL: &str = "rgba(255,255,255,0.1)";

/// Stroke-drawn overlays carry no fill.
pub const FILL_NONE: &str = "none";

pub const STROKE_SELECTED: &str = "white";
pub const STROKE_ACTIVE: &str = "#fff";
pub const STROKE_IDLE: &str = "rgba(255,255,255,0.2)";

pub const STROKE_WIDTH_SELECTED: f64 = 1.5;
pub const STROKE_WIDTH_OVERLAY: f64 = 1.0;
pub const STROKE_WIDTH_IDLE: f64 = 0.5;

pub const OPACITY_SELECTED: f64 = 0.8;
pub const OPACITY_ACTIVE: f64 = 0.7;
pub const OPACITY_HOVERED: f64 = 0.6;
pub const OPACITY_BASE_IDLE: f64 = 1.0;
pub const OPACITY_INTERNAL_IDLE: f64 = 0.0;
pub const OPACITY_OVERLAY_IDLE: f64 = 0.1;
